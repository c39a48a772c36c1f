//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Author row
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// Author row with the number of books referencing it
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AuthorBookCount {
    pub id: i32,
    pub name: String,
    pub total_books: i64,
}

/// Author as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorView {
    pub id: i32,
    pub name: String,
    /// Number of books currently written by this author
    pub total_books: i64,
}

impl AuthorView {
    pub fn new(author: Author, total_books: i64) -> Self {
        Self {
            id: author.id,
            name: author.name,
            total_books,
        }
    }
}

impl From<AuthorBookCount> for AuthorView {
    fn from(row: AuthorBookCount) -> Self {
        Self {
            id: row.id,
            name: row.name,
            total_books: row.total_books,
        }
    }
}

/// Create or update author request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AuthorRequest {
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[validate(
        custom(function = "super::not_blank", message = "Author name is required"),
        length(max = 200, message = "Author name cannot exceed 200 characters")
    )]
    pub name: String,
}
