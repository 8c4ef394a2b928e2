//! Response DTOs for the demo HTTP surface
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for GET /ttl/:key
#[derive(Debug, Clone, Serialize)]
pub struct TtlGetResponse {
    pub key: String,
    pub value: String,
    /// Remaining lifetime in milliseconds, None = never expires
    pub ttl_remaining_ms: Option<u64>,
}

impl TtlGetResponse {
    /// Creates a new TtlGetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>, ttl_remaining_ms: Option<u64>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ttl_remaining_ms,
        }
    }
}

/// Response body for PUT /ttl
#[derive(Debug, Clone, Serialize)]
pub struct TtlSetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
}

impl TtlSetResponse {
    /// Creates a new TtlSetResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
        }
    }
}

/// Response body for DELETE /ttl/:key
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for GET /lru/:key
#[derive(Debug, Clone, Serialize)]
pub struct LruGetResponse {
    pub key: String,
    pub value: String,
}

impl LruGetResponse {
    /// Creates a new LruGetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for PUT /lru
#[derive(Debug, Clone, Serialize)]
pub struct LruPutResponse {
    pub key: String,
    /// Key evicted to make room, if any
    pub evicted: Option<String>,
}

impl LruPutResponse {
    /// Creates a new LruPutResponse
    pub fn new(key: impl Into<String>, evicted: Option<String>) -> Self {
        Self {
            key: key.into(),
            evicted,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Entries held by the TTL cache, including not-yet-swept expired ones
    pub ttl_entries: usize,
    pub lru_entries: usize,
    /// Clients with retained rate-limit state
    pub limiter_keys: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(ttl_entries: usize, lru_entries: usize, limiter_keys: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            ttl_entries,
            lru_entries,
            limiter_keys,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
