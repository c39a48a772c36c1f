//! In-process store used for demos and tests
//!
//! Mirrors the PostgreSQL schema: identities come from per-table sequences
//! and are never reused, and parents referenced by books cannot be removed.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookReference, CatalogStore};
use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorBookCount},
        book::{Book, BookDetails, BookFields},
        genre::{Genre, GenreBookCount},
    },
};

#[derive(Default)]
struct Tables {
    authors: BTreeMap<i32, Author>,
    genres: BTreeMap<i32, Genre>,
    books: BTreeMap<i32, Book>,
    author_seq: i32,
    genre_seq: i32,
    book_seq: i32,
}

impl Tables {
    fn count_books(&self, reference: BookReference) -> i64 {
        self.books
            .values()
            .filter(|book| match reference {
                BookReference::Author(id) => book.author_id == id,
                BookReference::Genre(id) => book.genre_id == id,
            })
            .count() as i64
    }

    fn author_with_count(&self, author: &Author) -> AuthorBookCount {
        AuthorBookCount {
            id: author.id,
            name: author.name.clone(),
            total_books: self.count_books(BookReference::Author(author.id)),
        }
    }

    fn genre_with_count(&self, genre: &Genre) -> GenreBookCount {
        GenreBookCount {
            id: genre.id,
            description: genre.description.clone(),
            total_books: self.count_books(BookReference::Genre(genre.id)),
        }
    }

    fn details(&self, book: &Book) -> AppResult<BookDetails> {
        let author = self.authors.get(&book.author_id).ok_or_else(|| {
            AppError::Storage(format!("book {} references missing author {}", book.id, book.author_id))
        })?;
        let genre = self.genres.get(&book.genre_id).ok_or_else(|| {
            AppError::Storage(format!("book {} references missing genre {}", book.id, book.genre_id))
        })?;
        Ok(BookDetails {
            id: book.id,
            title: book.title.clone(),
            author_id: author.id,
            author_name: author.name.clone(),
            genre_id: genre.id,
            genre_description: genre.description.clone(),
        })
    }

    /// Foreign key check applied on book writes
    fn check_references(&self, fields: &BookFields) -> AppResult<()> {
        if !self.authors.contains_key(&fields.author_id) {
            return Err(AppError::Storage(format!(
                "foreign key violation: author {} does not exist",
                fields.author_id
            )));
        }
        if !self.genres.contains_key(&fields.genre_id) {
            return Err(AppError::Storage(format!(
                "foreign key violation: genre {} does not exist",
                fields.genre_id
            )));
        }
        Ok(())
    }
}

/// Catalog tables held in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn authors_with_book_counts(&self) -> AppResult<Vec<AuthorBookCount>> {
        let tables = self.tables.read().await;
        Ok(tables.authors.values().map(|a| tables.author_with_count(a)).collect())
    }

    async fn find_author(&self, id: i32) -> AppResult<Option<Author>> {
        Ok(self.tables.read().await.authors.get(&id).cloned())
    }

    async fn find_author_with_book_count(&self, id: i32) -> AppResult<Option<AuthorBookCount>> {
        let tables = self.tables.read().await;
        Ok(tables.authors.get(&id).map(|a| tables.author_with_count(a)))
    }

    async fn insert_author(&self, name: &str) -> AppResult<Author> {
        let mut tables = self.tables.write().await;
        tables.author_seq += 1;
        let author = Author {
            id: tables.author_seq,
            name: name.to_string(),
        };
        tables.authors.insert(author.id, author.clone());
        Ok(author)
    }

    async fn update_author(&self, id: i32, name: &str) -> AppResult<Option<Author>> {
        let mut tables = self.tables.write().await;
        Ok(tables.authors.get_mut(&id).map(|author| {
            author.name = name.to_string();
            author.clone()
        }))
    }

    async fn delete_author(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.count_books(BookReference::Author(id)) > 0 {
            return Err(AppError::Storage(format!(
                "foreign key violation: author {} is still referenced by books",
                id
            )));
        }
        Ok(tables.authors.remove(&id).is_some())
    }

    async fn genres_with_book_counts(&self) -> AppResult<Vec<GenreBookCount>> {
        let tables = self.tables.read().await;
        Ok(tables.genres.values().map(|g| tables.genre_with_count(g)).collect())
    }

    async fn find_genre(&self, id: i32) -> AppResult<Option<Genre>> {
        Ok(self.tables.read().await.genres.get(&id).cloned())
    }

    async fn find_genre_with_book_count(&self, id: i32) -> AppResult<Option<GenreBookCount>> {
        let tables = self.tables.read().await;
        Ok(tables.genres.get(&id).map(|g| tables.genre_with_count(g)))
    }

    async fn insert_genre(&self, description: &str) -> AppResult<Genre> {
        let mut tables = self.tables.write().await;
        tables.genre_seq += 1;
        let genre = Genre {
            id: tables.genre_seq,
            description: description.to_string(),
        };
        tables.genres.insert(genre.id, genre.clone());
        Ok(genre)
    }

    async fn update_genre(&self, id: i32, description: &str) -> AppResult<Option<Genre>> {
        let mut tables = self.tables.write().await;
        Ok(tables.genres.get_mut(&id).map(|genre| {
            genre.description = description.to_string();
            genre.clone()
        }))
    }

    async fn delete_genre(&self, id: i32) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.count_books(BookReference::Genre(id)) > 0 {
            return Err(AppError::Storage(format!(
                "foreign key violation: genre {} is still referenced by books",
                id
            )));
        }
        Ok(tables.genres.remove(&id).is_some())
    }

    async fn books_with_relations(&self) -> AppResult<Vec<BookDetails>> {
        let tables = self.tables.read().await;
        tables.books.values().map(|b| tables.details(b)).collect()
    }

    async fn find_book(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.tables.read().await.books.get(&id).cloned())
    }

    async fn find_book_with_relations(&self, id: i32) -> AppResult<Option<BookDetails>> {
        let tables = self.tables.read().await;
        tables.books.get(&id).map(|b| tables.details(b)).transpose()
    }

    async fn insert_book(&self, fields: &BookFields) -> AppResult<Book> {
        let mut tables = self.tables.write().await;
        tables.check_references(fields)?;
        tables.book_seq += 1;
        let book = Book {
            id: tables.book_seq,
            title: fields.title.clone(),
            author_id: fields.author_id,
            genre_id: fields.genre_id,
        };
        tables.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update_book(&self, id: i32, fields: &BookFields) -> AppResult<Option<Book>> {
        let mut tables = self.tables.write().await;
        if !tables.books.contains_key(&id) {
            return Ok(None);
        }
        tables.check_references(fields)?;
        Ok(tables.books.get_mut(&id).map(|book| {
            book.title = fields.title.clone();
            book.author_id = fields.author_id;
            book.genre_id = fields.genre_id;
            book.clone()
        }))
    }

    async fn delete_book(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables.write().await.books.remove(&id).is_some())
    }

    async fn count_books_referencing(&self, reference: BookReference) -> AppResult<i64> {
        Ok(self.tables.read().await.count_books(reference))
    }
}
