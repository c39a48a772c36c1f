//! Book service
//!
//! Books reference one author and one genre by id. Both references are
//! checked before every write, author first, and the response is built from
//! a fresh join after the write rather than from the request.

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult, Entity},
    models::{
        book::{BookFields, BookRequest, BookView},
        response::ApiResponse,
    },
    repository::CatalogStore,
};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn CatalogStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// List all books with author names and genre descriptions
    pub async fn list(&self) -> ApiResponse<Vec<BookView>> {
        let result = self
            .store
            .books_with_relations()
            .await
            .map(|rows| rows.into_iter().map(BookView::from).collect());
        ApiResponse::from_result(result, "Books retrieved successfully", "Error retrieving books")
    }

    pub async fn get_by_id(&self, id: i32) -> ApiResponse<BookView> {
        ApiResponse::from_result(
            self.resolve(id).await,
            "Book retrieved successfully",
            "Error retrieving book",
        )
    }

    pub async fn create(&self, request: &BookRequest) -> ApiResponse<BookView> {
        ApiResponse::from_result(
            self.try_create(request).await,
            "Book created successfully",
            "Error creating book",
        )
    }

    pub async fn update(&self, id: i32, request: &BookRequest) -> ApiResponse<BookView> {
        ApiResponse::from_result(
            self.try_update(id, request).await,
            "Book updated successfully",
            "Error updating book",
        )
    }

    pub async fn delete(&self, id: i32) -> ApiResponse<bool> {
        ApiResponse::from_result(
            self.try_delete(id).await,
            "Book deleted successfully",
            "Error deleting book",
        )
    }

    /// Load a book joined with its author and genre
    async fn resolve(&self, id: i32) -> AppResult<BookView> {
        self.store
            .find_book_with_relations(id)
            .await?
            .map(BookView::from)
            .ok_or(AppError::NotFound { entity: Entity::Book, id })
    }

    async fn check_references(&self, fields: &BookFields) -> AppResult<()> {
        if self.store.find_author(fields.author_id).await?.is_none() {
            return Err(AppError::MissingReference {
                entity: Entity::Author,
                id: fields.author_id,
            });
        }
        if self.store.find_genre(fields.genre_id).await?.is_none() {
            return Err(AppError::MissingReference {
                entity: Entity::Genre,
                id: fields.genre_id,
            });
        }
        Ok(())
    }

    async fn try_create(&self, request: &BookRequest) -> AppResult<BookView> {
        request.validate()?;
        let fields = BookFields::from(request.clone());
        self.check_references(&fields).await?;

        let book = self.store.insert_book(&fields).await?;
        tracing::info!(book_id = book.id, author_id = book.author_id, genre_id = book.genre_id, "Book created");
        self.resolve(book.id).await
    }

    async fn try_update(&self, id: i32, request: &BookRequest) -> AppResult<BookView> {
        request.validate()?;
        if self.store.find_book(id).await?.is_none() {
            return Err(AppError::NotFound { entity: Entity::Book, id });
        }

        let fields = BookFields::from(request.clone());
        self.check_references(&fields).await?;

        self.store
            .update_book(id, &fields)
            .await?
            .ok_or(AppError::NotFound { entity: Entity::Book, id })?;
        self.resolve(id).await
    }

    async fn try_delete(&self, id: i32) -> AppResult<bool> {
        if self.store.find_book(id).await?.is_none() {
            return Err(AppError::NotFound { entity: Entity::Book, id });
        }
        if !self.store.delete_book(id).await? {
            return Err(AppError::NotFound { entity: Entity::Book, id });
        }
        tracing::info!(book_id = id, "Book deleted");
        Ok(true)
    }
}
