//! Error types for the eviction stores
//!
//! Store operations never fail; only construction and the HTTP surface
//! produce errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Evict Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum EvictError {
    /// Construction parameters violate a precondition
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A background sweeper was requested outside a tokio runtime
    #[error("No tokio runtime available to run the background sweep")]
    NoRuntime,

    /// Key not found (HTTP surface only)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Client exceeded its request budget
    #[error("Rate limit exceeded for client: {0}")]
    RateLimited(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for EvictError {
    fn into_response(self) -> Response {
        let status = match &self {
            EvictError::NotFound(_) => StatusCode::NOT_FOUND,
            EvictError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            EvictError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            EvictError::InvalidConfig(_) | EvictError::NoRuntime => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, EvictError>;
