//! Error types for the comment service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::comments::CommentId;

// == Config Error Enum ==
/// Configuration errors. Fatal at startup; no cache is built when one occurs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Eviction algorithm name is neither `lru` nor `lfu`
    #[error("Unknown cache algorithm: '{0}' (expected 'lru' or 'lfu')")]
    UnknownAlgorithm(String),

    /// Capacity is zero or not an integer
    #[error("Invalid cache capacity: '{0}' (expected a positive integer)")]
    InvalidCapacity(String),

    /// Server port is not a valid port number
    #[error("Invalid server port: '{0}'")]
    InvalidPort(String),

    /// A required variable is not set
    #[error("Missing required configuration: {0}")]
    Missing(&'static str),
}

// == Service Error Enum ==
/// Errors surfaced by the comment store and the HTTP layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No comment with the given id
    #[error("Comment not found: {0}")]
    NotFound(CommentId),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the comment service.
pub type Result<T> = std::result::Result<T, ServiceError>;
