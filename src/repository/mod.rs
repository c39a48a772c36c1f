//! Persistence gateway for authors, genres and books

pub mod authors;
pub mod books;
pub mod genres;
pub mod memory;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        author::{Author, AuthorBookCount},
        book::{Book, BookDetails, BookFields},
        genre::{Genre, GenreBookCount},
    },
};

pub use memory::MemoryStore;

/// Parent side of a book relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookReference {
    Author(i32),
    Genre(i32),
}

/// Load/find/add/remove/count operations over the three catalog tables.
///
/// Absent rows are reported as `Ok(None)` or `Ok(false)`; `Err` is reserved
/// for store faults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Check that the store is reachable
    async fn ping(&self) -> AppResult<()>;

    async fn authors_with_book_counts(&self) -> AppResult<Vec<AuthorBookCount>>;
    async fn find_author(&self, id: i32) -> AppResult<Option<Author>>;
    async fn find_author_with_book_count(&self, id: i32) -> AppResult<Option<AuthorBookCount>>;
    async fn insert_author(&self, name: &str) -> AppResult<Author>;
    async fn update_author(&self, id: i32, name: &str) -> AppResult<Option<Author>>;
    async fn delete_author(&self, id: i32) -> AppResult<bool>;

    async fn genres_with_book_counts(&self) -> AppResult<Vec<GenreBookCount>>;
    async fn find_genre(&self, id: i32) -> AppResult<Option<Genre>>;
    async fn find_genre_with_book_count(&self, id: i32) -> AppResult<Option<GenreBookCount>>;
    async fn insert_genre(&self, description: &str) -> AppResult<Genre>;
    async fn update_genre(&self, id: i32, description: &str) -> AppResult<Option<Genre>>;
    async fn delete_genre(&self, id: i32) -> AppResult<bool>;

    async fn books_with_relations(&self) -> AppResult<Vec<BookDetails>>;
    async fn find_book(&self, id: i32) -> AppResult<Option<Book>>;
    async fn find_book_with_relations(&self, id: i32) -> AppResult<Option<BookDetails>>;
    async fn insert_book(&self, fields: &BookFields) -> AppResult<Book>;
    async fn update_book(&self, id: i32, fields: &BookFields) -> AppResult<Option<Book>>;
    async fn delete_book(&self, id: i32) -> AppResult<bool>;

    /// Number of books currently pointing at the given author or genre
    async fn count_books_referencing(&self, reference: BookReference) -> AppResult<i64>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for Repository {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn authors_with_book_counts(&self) -> AppResult<Vec<AuthorBookCount>> {
        self.authors_list_with_counts().await
    }

    async fn find_author(&self, id: i32) -> AppResult<Option<Author>> {
        self.authors_get_by_id(id).await
    }

    async fn find_author_with_book_count(&self, id: i32) -> AppResult<Option<AuthorBookCount>> {
        self.authors_get_with_count(id).await
    }

    async fn insert_author(&self, name: &str) -> AppResult<Author> {
        self.authors_create(name).await
    }

    async fn update_author(&self, id: i32, name: &str) -> AppResult<Option<Author>> {
        self.authors_update(id, name).await
    }

    async fn delete_author(&self, id: i32) -> AppResult<bool> {
        self.authors_delete(id).await
    }

    async fn genres_with_book_counts(&self) -> AppResult<Vec<GenreBookCount>> {
        self.genres_list_with_counts().await
    }

    async fn find_genre(&self, id: i32) -> AppResult<Option<Genre>> {
        self.genres_get_by_id(id).await
    }

    async fn find_genre_with_book_count(&self, id: i32) -> AppResult<Option<GenreBookCount>> {
        self.genres_get_with_count(id).await
    }

    async fn insert_genre(&self, description: &str) -> AppResult<Genre> {
        self.genres_create(description).await
    }

    async fn update_genre(&self, id: i32, description: &str) -> AppResult<Option<Genre>> {
        self.genres_update(id, description).await
    }

    async fn delete_genre(&self, id: i32) -> AppResult<bool> {
        self.genres_delete(id).await
    }

    async fn books_with_relations(&self) -> AppResult<Vec<BookDetails>> {
        self.books_list_details().await
    }

    async fn find_book(&self, id: i32) -> AppResult<Option<Book>> {
        self.books_get_by_id(id).await
    }

    async fn find_book_with_relations(&self, id: i32) -> AppResult<Option<BookDetails>> {
        self.books_get_details(id).await
    }

    async fn insert_book(&self, fields: &BookFields) -> AppResult<Book> {
        self.books_create(fields).await
    }

    async fn update_book(&self, id: i32, fields: &BookFields) -> AppResult<Option<Book>> {
        self.books_update(id, fields).await
    }

    async fn delete_book(&self, id: i32) -> AppResult<bool> {
        self.books_delete(id).await
    }

    async fn count_books_referencing(&self, reference: BookReference) -> AppResult<i64> {
        self.books_count_referencing(reference).await
    }
}
