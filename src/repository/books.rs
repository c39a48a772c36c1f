//! Book queries on Repository

use super::{BookReference, Repository};
use crate::{
    error::AppResult,
    models::book::{Book, BookDetails, BookFields},
};

const BOOK_DETAILS_SELECT: &str = r#"
    SELECT b.id, b.title,
           b.author_id, a.name AS author_name,
           b.genre_id, g.description AS genre_description
    FROM books b
    JOIN authors a ON a.id = b.author_id
    JOIN genres g ON g.id = b.genre_id
"#;

impl Repository {
    /// List all books joined with author and genre
    pub async fn books_list_details(&self) -> AppResult<Vec<BookDetails>> {
        let query = format!("{} ORDER BY b.id", BOOK_DETAILS_SELECT);
        let rows = sqlx::query_as::<_, BookDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn books_get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT id, title, author_id, genre_id FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn books_get_details(&self, id: i32) -> AppResult<Option<BookDetails>> {
        let query = format!("{} WHERE b.id = $1", BOOK_DETAILS_SELECT);
        let row = sqlx::query_as::<_, BookDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn books_create(&self, fields: &BookFields) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author_id, genre_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, author_id, genre_id
            "#,
        )
        .bind(&fields.title)
        .bind(fields.author_id)
        .bind(fields.genre_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn books_update(&self, id: i32, fields: &BookFields) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET title = $1, author_id = $2, genre_id = $3
            WHERE id = $4
            RETURNING id, title, author_id, genre_id
            "#,
        )
        .bind(&fields.title)
        .bind(fields.author_id)
        .bind(fields.genre_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn books_delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count books pointing at an author or a genre
    pub async fn books_count_referencing(&self, reference: BookReference) -> AppResult<i64> {
        let (sql, id) = match reference {
            BookReference::Author(id) => ("SELECT COUNT(*) FROM books WHERE author_id = $1", id),
            BookReference::Genre(id) => ("SELECT COUNT(*) FROM books WHERE genre_id = $1", id),
        };
        let count: i64 = sqlx::query_scalar(sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
