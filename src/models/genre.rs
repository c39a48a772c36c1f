//! Genre model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Genre {
    pub id: i32,
    pub description: String,
}

/// Genre row with the number of books referencing it
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct GenreBookCount {
    pub id: i32,
    pub description: String,
    pub total_books: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenreView {
    pub id: i32,
    pub description: String,
    pub total_books: i64,
}

impl GenreView {
    pub fn new(genre: Genre, total_books: i64) -> Self {
        Self {
            id: genre.id,
            description: genre.description,
            total_books,
        }
    }
}

impl From<GenreBookCount> for GenreView {
    fn from(row: GenreBookCount) -> Self {
        Self {
            id: row.id,
            description: row.description,
            total_books: row.total_books,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GenreRequest {
    #[serde(default, deserialize_with = "super::null_as_default")]
    #[validate(
        custom(function = "super::not_blank", message = "Genre description is required"),
        length(max = 100, message = "Genre description cannot exceed 100 characters")
    )]
    pub description: String,
}
