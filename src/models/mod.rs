//! Request and Response models for the demo HTTP surface
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{LruPutRequest, TtlSetRequest, MAX_KEY_LENGTH};
pub use responses::{
    DeleteResponse, ErrorResponse, HealthResponse, LruGetResponse, LruPutResponse, TtlGetResponse,
    TtlSetResponse,
};
