//! Book endpoints

use axum::{
    extract::State,
    response::Response,
};

use crate::{
    models::{
        book::{BookRequest, BookView},
        ApiResponse,
    },
    AppState,
};

use super::{created, openapi::Envelope, IdPath, ValidatedJson};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Books with author name and genre description (data: [BookView])", body = Envelope),
        (status = 400, description = "Store failure", body = Envelope)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> ApiResponse<Vec<BookView>> {
    state.books().list().await
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details (data: BookView)", body = Envelope),
        (status = 404, description = "Book not found", body = Envelope)
    )
)]
pub async fn get_book(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResponse<BookView> {
    state.books().get_by_id(id).await
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created (data: BookView)", body = Envelope),
        (status = 400, description = "Invalid data, or unknown author or genre", body = Envelope)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BookRequest>,
) -> Response {
    let response = state.books().create(&request).await;
    let id = response.data.as_ref().map(|book| book.id);
    created("books", id, response)
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookRequest,
    responses(
        (status = 200, description = "Book updated (data: BookView)", body = Envelope),
        (status = 400, description = "Invalid data, or unknown author or genre", body = Envelope),
        (status = 404, description = "Book not found", body = Envelope)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<BookRequest>,
) -> ApiResponse<BookView> {
    state.books().update(id, &request).await
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted (data: true)", body = Envelope),
        (status = 404, description = "Book not found", body = Envelope)
    )
)]
pub async fn delete_book(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResponse<bool> {
    state.books().delete(id).await
}
