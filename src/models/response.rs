//! Uniform response envelope returned by every service operation

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Success/failure wrapper around a payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Human-readable summary
    pub message: String,
    /// Payload, present only on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<String>,
    /// Failure class, never serialized
    #[serde(skip)]
    pub kind: Option<ErrorKind>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: Vec::new(),
            kind: None,
        }
    }

    /// Failure envelope. Business errors carry their own summary; persistence
    /// faults use `fault_message` and keep the fault text as the only error.
    pub fn failure(fault_message: &str, error: AppError) -> Self {
        Self {
            success: false,
            message: error.summary().unwrap_or_else(|| fault_message.to_string()),
            data: None,
            errors: error.details(),
            kind: Some(error.kind()),
        }
    }

    pub fn from_result(result: Result<T, AppError>, success_message: &str, fault_message: &str) -> Self {
        match result {
            Ok(data) => Self::success(success_message, data),
            Err(error) => {
                if error.kind() == ErrorKind::Persistence {
                    tracing::warn!("{}: {}", fault_message, error);
                }
                Self::failure(fault_message, error)
            }
        }
    }

    /// HTTP status for this envelope
    pub fn status(&self) -> StatusCode {
        match (self.success, self.kind) {
            (true, _) => StatusCode::OK,
            (false, Some(ErrorKind::NotFound)) => StatusCode::NOT_FOUND,
            (false, _) => StatusCode::BAD_REQUEST,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}
