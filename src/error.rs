//! Error types for the response cache
//!
//! Provides unified error handling using thiserror. Cache absence is not an
//! error at the store level; `NotFound` only exists for the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache and its service host.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not present (or expired) when served over HTTP
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key rejected by validation (empty or too long)
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The time source could not produce a valid timestamp
    #[error("Clock unavailable: {0}")]
    ClockUnavailable(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidKey(_) => StatusCode::BAD_REQUEST,
            CacheError::ClockUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
