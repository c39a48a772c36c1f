//! Genre queries on Repository

use super::Repository;
use crate::{
    error::AppResult,
    models::genre::{Genre, GenreBookCount},
};

impl Repository {
    /// List all genres with their book counts
    pub async fn genres_list_with_counts(&self) -> AppResult<Vec<GenreBookCount>> {
        let rows = sqlx::query_as::<_, GenreBookCount>(
            r#"
            SELECT g.id, g.description, COUNT(b.id) AS total_books
            FROM genres g
            LEFT JOIN books b ON b.genre_id = g.id
            GROUP BY g.id, g.description
            ORDER BY g.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn genres_get_by_id(&self, id: i32) -> AppResult<Option<Genre>> {
        let row = sqlx::query_as::<_, Genre>("SELECT id, description FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn genres_get_with_count(&self, id: i32) -> AppResult<Option<GenreBookCount>> {
        let row = sqlx::query_as::<_, GenreBookCount>(
            r#"
            SELECT g.id, g.description,
                   (SELECT COUNT(*) FROM books b WHERE b.genre_id = g.id) AS total_books
            FROM genres g
            WHERE g.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn genres_create(&self, description: &str) -> AppResult<Genre> {
        let row = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (description) VALUES ($1) RETURNING id, description",
        )
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn genres_update(&self, id: i32, description: &str) -> AppResult<Option<Genre>> {
        let row = sqlx::query_as::<_, Genre>(
            "UPDATE genres SET description = $1 WHERE id = $2 RETURNING id, description",
        )
        .bind(description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn genres_delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
