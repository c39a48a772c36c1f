//! Genre endpoints

use axum::{
    extract::State,
    response::Response,
};

use crate::{
    models::{
        genre::{GenreRequest, GenreView},
        ApiResponse,
    },
    AppState,
};

use super::{created, openapi::Envelope, IdPath, ValidatedJson};

/// List all genres
#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    responses(
        (status = 200, description = "Genres with their book counts (data: [GenreView])", body = Envelope),
        (status = 400, description = "Store failure", body = Envelope)
    )
)]
pub async fn list_genres(State(state): State<AppState>) -> ApiResponse<Vec<GenreView>> {
    state.genres().list().await
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre details (data: GenreView)", body = Envelope),
        (status = 404, description = "Genre not found", body = Envelope)
    )
)]
pub async fn get_genre(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResponse<GenreView> {
    state.genres().get_by_id(id).await
}

/// Create a genre
#[utoipa::path(
    post,
    path = "/genres",
    tag = "genres",
    request_body = GenreRequest,
    responses(
        (status = 201, description = "Genre created (data: GenreView)", body = Envelope),
        (status = 400, description = "Invalid data", body = Envelope)
    )
)]
pub async fn create_genre(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenreRequest>,
) -> Response {
    let response = state.genres().create(&request).await;
    let id = response.data.as_ref().map(|genre| genre.id);
    created("genres", id, response)
}

/// Update a genre description
#[utoipa::path(
    put,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = GenreRequest,
    responses(
        (status = 200, description = "Genre updated (data: GenreView)", body = Envelope),
        (status = 400, description = "Invalid data", body = Envelope),
        (status = 404, description = "Genre not found", body = Envelope)
    )
)]
pub async fn update_genre(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<GenreRequest>,
) -> ApiResponse<GenreView> {
    state.genres().update(id, &request).await
}

/// Delete a genre without books
#[utoipa::path(
    delete,
    path = "/genres/{id}",
    tag = "genres",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre deleted (data: true)", body = Envelope),
        (status = 400, description = "Genre still has books", body = Envelope),
        (status = 404, description = "Genre not found", body = Envelope)
    )
)]
pub async fn delete_genre(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResponse<bool> {
    state.genres().delete(id).await
}
