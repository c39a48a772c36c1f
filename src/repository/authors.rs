//! Author queries on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::author::{Author, AuthorBookCount},
};

impl Repository {
    /// List all authors with their book counts
    pub async fn authors_list_with_counts(&self) -> AppResult<Vec<AuthorBookCount>> {
        let rows = sqlx::query_as::<_, AuthorBookCount>(
            r#"
            SELECT a.id, a.name, COUNT(b.id) AS total_books
            FROM authors a
            LEFT JOIN books b ON b.author_id = a.id
            GROUP BY a.id, a.name
            ORDER BY a.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn authors_get_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Get one author with its book count
    pub async fn authors_get_with_count(&self, id: i32) -> AppResult<Option<AuthorBookCount>> {
        let row = sqlx::query_as::<_, AuthorBookCount>(
            r#"
            SELECT a.id, a.name,
                   (SELECT COUNT(*) FROM books b WHERE b.author_id = a.id) AS total_books
            FROM authors a
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn authors_create(&self, name: &str) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            "INSERT INTO authors (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn authors_update(&self, id: i32, name: &str) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, Author>(
            "UPDATE authors SET name = $1 WHERE id = $2 RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete an author. Rows still referenced by books are refused by the
    /// foreign key and surface as a database error.
    pub async fn authors_delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
