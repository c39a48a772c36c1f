//! Author service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult, Entity},
    models::{
        author::{AuthorRequest, AuthorView},
        response::ApiResponse,
    },
    repository::{BookReference, CatalogStore},
};

#[derive(Clone)]
pub struct AuthorService {
    store: Arc<dyn CatalogStore>,
}

impl AuthorService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// List all authors with their book counts
    pub async fn list(&self) -> ApiResponse<Vec<AuthorView>> {
        let result = self
            .store
            .authors_with_book_counts()
            .await
            .map(|rows| rows.into_iter().map(AuthorView::from).collect());
        ApiResponse::from_result(result, "Authors retrieved successfully", "Error retrieving authors")
    }

    pub async fn get_by_id(&self, id: i32) -> ApiResponse<AuthorView> {
        ApiResponse::from_result(
            self.find(id).await,
            "Author retrieved successfully",
            "Error retrieving author",
        )
    }

    pub async fn create(&self, request: &AuthorRequest) -> ApiResponse<AuthorView> {
        ApiResponse::from_result(
            self.try_create(request).await,
            "Author created successfully",
            "Error creating author",
        )
    }

    pub async fn update(&self, id: i32, request: &AuthorRequest) -> ApiResponse<AuthorView> {
        ApiResponse::from_result(
            self.try_update(id, request).await,
            "Author updated successfully",
            "Error updating author",
        )
    }

    /// Delete an author that no book references
    pub async fn delete(&self, id: i32) -> ApiResponse<bool> {
        ApiResponse::from_result(
            self.try_delete(id).await,
            "Author deleted successfully",
            "Error deleting author",
        )
    }

    async fn find(&self, id: i32) -> AppResult<AuthorView> {
        self.store
            .find_author_with_book_count(id)
            .await?
            .map(AuthorView::from)
            .ok_or(AppError::NotFound { entity: Entity::Author, id })
    }

    async fn try_create(&self, request: &AuthorRequest) -> AppResult<AuthorView> {
        request.validate()?;
        let author = self.store.insert_author(&request.name).await?;
        tracing::info!(author_id = author.id, "Author created");
        Ok(AuthorView::new(author, 0))
    }

    async fn try_update(&self, id: i32, request: &AuthorRequest) -> AppResult<AuthorView> {
        request.validate()?;
        let author = self
            .store
            .update_author(id, &request.name)
            .await?
            .ok_or(AppError::NotFound { entity: Entity::Author, id })?;

        // Counted after the write so the figure reflects current references
        let total_books = self
            .store
            .count_books_referencing(BookReference::Author(author.id))
            .await?;
        Ok(AuthorView::new(author, total_books))
    }

    async fn try_delete(&self, id: i32) -> AppResult<bool> {
        let author = self
            .store
            .find_author_with_book_count(id)
            .await?
            .ok_or(AppError::NotFound { entity: Entity::Author, id })?;

        if author.total_books > 0 {
            return Err(AppError::HasDependentBooks { entity: Entity::Author });
        }

        if !self.store.delete_author(id).await? {
            return Err(AppError::NotFound { entity: Entity::Author, id });
        }
        tracing::info!(author_id = id, "Author deleted");
        Ok(true)
    }
}
