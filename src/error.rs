//! Error types for the catalog server

use std::fmt;

use axum::response::{IntoResponse, Response};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::response::ApiResponse;

/// Catalog entity kinds, used to phrase errors and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Author,
    Genre,
    Book,
}

impl Entity {
    pub fn lowercase(self) -> &'static str {
        match self {
            Entity::Author => "author",
            Entity::Genre => "genre",
            Entity::Book => "book",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Author => "Author",
            Entity::Genre => "Genre",
            Entity::Book => "Book",
        };
        f.write_str(name)
    }
}

/// Failure classes inspected by the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Integrity,
    Persistence,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{entity} with ID {id} was not found")]
    NotFound { entity: Entity, id: i32 },

    /// A book points at an author or genre that does not exist
    #[error("{entity} with ID {id} does not exist")]
    MissingReference { entity: Entity, id: i32 },

    #[error("The {} has associated books. Remove the books before deleting the {}.", .entity.lowercase(), .entity.lowercase())]
    HasDependentBooks { entity: Entity },

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Storage(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::MissingReference { .. } | AppError::HasDependentBooks { .. } => {
                ErrorKind::Integrity
            }
            AppError::Database(_) | AppError::Storage(_) => ErrorKind::Persistence,
        }
    }

    /// Envelope summary for business failures; `None` for persistence faults,
    /// whose summary depends on the operation that failed.
    pub fn summary(&self) -> Option<String> {
        match self {
            AppError::Validation(_) => Some("Invalid data".to_string()),
            AppError::NotFound { entity, .. } | AppError::MissingReference { entity, .. } => {
                Some(format!("{} not found", entity))
            }
            AppError::HasDependentBooks { entity } => Some(format!(
                "Cannot delete {} with associated books",
                entity.lowercase()
            )),
            AppError::Database(_) | AppError::Storage(_) => None,
        }
    }

    /// Error strings reported in the envelope
    pub fn details(&self) -> Vec<String> {
        match self {
            AppError::Validation(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// One message per violated rule, ordered by field name
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages = fields
            .into_iter()
            .flat_map(|(field, rules)| {
                rules.iter().map(move |rule| match &rule.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        AppError::Validation(messages)
    }
}

/// Rejections raised before a service runs (body parsing and validation)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.kind() == ErrorKind::Persistence {
            tracing::error!("Unhandled persistence error: {}", self);
        }
        ApiResponse::<()>::failure("Invalid data", self).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AppError::NotFound { entity: Entity::Author, id: 7 };
        assert_eq!(err.to_string(), "Author with ID 7 was not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.summary().as_deref(), Some("Author not found"));
    }

    #[test]
    fn test_missing_reference_is_integrity() {
        let err = AppError::MissingReference { entity: Entity::Genre, id: 3 };
        assert_eq!(err.kind(), ErrorKind::Integrity);
        assert_eq!(err.summary().as_deref(), Some("Genre not found"));
        assert!(!err.to_string().contains("was not found"));
    }

    #[test]
    fn test_dependent_books_message() {
        let err = AppError::HasDependentBooks { entity: Entity::Genre };
        assert_eq!(
            err.to_string(),
            "The genre has associated books. Remove the books before deleting the genre."
        );
        assert_eq!(err.kind(), ErrorKind::Integrity);
    }

    #[test]
    fn test_storage_fault_has_no_summary() {
        let err = AppError::Storage("connection reset".to_string());
        assert_eq!(err.kind(), ErrorKind::Persistence);
        assert_eq!(err.summary(), None);
        assert_eq!(err.details(), vec!["connection reset".to_string()]);
    }

    #[test]
    fn test_validation_details_keep_every_rule() {
        let err = AppError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(err.details().len(), 2);
    }
}
