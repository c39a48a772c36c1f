//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book row; author and genre are referenced by id only
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub genre_id: i32,
}

/// Scalar fields written on book insert and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author_id: i32,
    pub genre_id: i32,
}

/// Book joined with its author's name and genre's description
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BookDetails {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub author_name: String,
    pub genre_id: i32,
    pub genre_description: String,
}

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookView {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub author_name: String,
    pub genre_id: i32,
    pub genre_description: String,
}

impl From<BookDetails> for BookView {
    fn from(row: BookDetails) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author_id: row.author_id,
            author_name: row.author_name,
            genre_id: row.genre_id,
            genre_description: row.genre_description,
        }
    }
}

/// Create or update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[validate(
        custom(function = "super::not_blank", message = "Book title is required"),
        length(max = 300, message = "Book title cannot exceed 300 characters")
    )]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[validate(range(min = 1, message = "Author ID must be greater than zero"))]
    pub author_id: i32,
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[validate(range(min = 1, message = "Genre ID must be greater than zero"))]
    pub genre_id: i32,
}

impl From<BookRequest> for BookFields {
    fn from(request: BookRequest) -> Self {
        Self {
            title: request.title,
            author_id: request.author_id,
            genre_id: request.genre_id,
        }
    }
}
