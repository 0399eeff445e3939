//! Error types for the response cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for fetching and serving cached responses.
///
/// Cache misses and expirations are not errors; they surface as `None`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The underlying HTTP request could not be completed
    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The upstream answered with a non-success status
    #[error("Upstream {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not valid JSON
    #[error("Invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::Fetch(_) | CacheError::Status { .. } | CacheError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the response cache.
pub type Result<T> = std::result::Result<T, CacheError>;
