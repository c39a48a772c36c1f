//! Data models for the catalog

pub mod author;
pub mod book;
pub mod genre;
pub mod response;

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

// Re-export commonly used types
pub use author::{Author, AuthorRequest, AuthorView};
pub use book::{Book, BookFields, BookRequest, BookView};
pub use genre::{Genre, GenreRequest, GenreView};
pub use response::ApiResponse;

/// Required-text rule: rejects empty and whitespace-only strings
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Reads an explicit JSON `null` as the field's default, so it reaches the
/// same validation rules as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
