//! Author endpoints

use axum::{
    extract::State,
    response::Response,
};

use crate::{
    models::{
        author::{AuthorRequest, AuthorView},
        ApiResponse,
    },
    AppState,
};

use super::{created, openapi::Envelope, IdPath, ValidatedJson};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Authors with their book counts (data: [AuthorView])", body = Envelope),
        (status = 400, description = "Store failure", body = Envelope)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> ApiResponse<Vec<AuthorView>> {
    state.authors().list().await
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details (data: AuthorView)", body = Envelope),
        (status = 404, description = "Author not found", body = Envelope)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResponse<AuthorView> {
    state.authors().get_by_id(id).await
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = AuthorRequest,
    responses(
        (status = 201, description = "Author created (data: AuthorView)", body = Envelope),
        (status = 400, description = "Invalid data", body = Envelope)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AuthorRequest>,
) -> Response {
    let response = state.authors().create(&request).await;
    let id = response.data.as_ref().map(|author| author.id);
    created("authors", id, response)
}

/// Rename an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Author updated (data: AuthorView)", body = Envelope),
        (status = 400, description = "Invalid data", body = Envelope),
        (status = 404, description = "Author not found", body = Envelope)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<AuthorRequest>,
) -> ApiResponse<AuthorView> {
    state.authors().update(id, &request).await
}

/// Delete an author without books
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted (data: true)", body = Envelope),
        (status = 400, description = "Author still has books", body = Envelope),
        (status = 404, description = "Author not found", body = Envelope)
    )
)]
pub async fn delete_author(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResponse<bool> {
    state.authors().delete(id).await
}
