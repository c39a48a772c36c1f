//! Genre service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult, Entity},
    models::{
        genre::{GenreRequest, GenreView},
        response::ApiResponse,
    },
    repository::{BookReference, CatalogStore},
};

#[derive(Clone)]
pub struct GenreService {
    store: Arc<dyn CatalogStore>,
}

impl GenreService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> ApiResponse<Vec<GenreView>> {
        let result = self
            .store
            .genres_with_book_counts()
            .await
            .map(|rows| rows.into_iter().map(GenreView::from).collect());
        ApiResponse::from_result(result, "Genres retrieved successfully", "Error retrieving genres")
    }

    pub async fn get_by_id(&self, id: i32) -> ApiResponse<GenreView> {
        let result = self
            .store
            .find_genre_with_book_count(id)
            .await
            .and_then(|row| row.map(GenreView::from).ok_or(AppError::NotFound { entity: Entity::Genre, id }));
        ApiResponse::from_result(result, "Genre retrieved successfully", "Error retrieving genre")
    }

    pub async fn create(&self, request: &GenreRequest) -> ApiResponse<GenreView> {
        ApiResponse::from_result(
            self.try_create(request).await,
            "Genre created successfully",
            "Error creating genre",
        )
    }

    pub async fn update(&self, id: i32, request: &GenreRequest) -> ApiResponse<GenreView> {
        ApiResponse::from_result(
            self.try_update(id, request).await,
            "Genre updated successfully",
            "Error updating genre",
        )
    }

    pub async fn delete(&self, id: i32) -> ApiResponse<bool> {
        ApiResponse::from_result(
            self.try_delete(id).await,
            "Genre deleted successfully",
            "Error deleting genre",
        )
    }

    async fn try_create(&self, request: &GenreRequest) -> AppResult<GenreView> {
        request.validate()?;
        let genre = self.store.insert_genre(&request.description).await?;
        tracing::info!(genre_id = genre.id, "Genre created");
        Ok(GenreView::new(genre, 0))
    }

    async fn try_update(&self, id: i32, request: &GenreRequest) -> AppResult<GenreView> {
        request.validate()?;
        let genre = self
            .store
            .update_genre(id, &request.description)
            .await?
            .ok_or(AppError::NotFound { entity: Entity::Genre, id })?;
        let total_books = self
            .store
            .count_books_referencing(BookReference::Genre(genre.id))
            .await?;
        Ok(GenreView::new(genre, total_books))
    }

    async fn try_delete(&self, id: i32) -> AppResult<bool> {
        let genre = self
            .store
            .find_genre_with_book_count(id)
            .await?
            .ok_or(AppError::NotFound { entity: Entity::Genre, id })?;

        if genre.total_books > 0 {
            return Err(AppError::HasDependentBooks { entity: Entity::Genre });
        }

        if !self.store.delete_genre(id).await? {
            return Err(AppError::NotFound { entity: Entity::Genre, id });
        }
        tracing::info!(genre_id = id, "Genre deleted");
        Ok(true)
    }
}
