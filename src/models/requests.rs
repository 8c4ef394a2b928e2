//! Request DTOs for the demo HTTP surface
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Request body for PUT /ttl
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
/// - `ttl_ms`: Optional lifetime in milliseconds; missing or 0 never expires
#[derive(Debug, Clone, Deserialize)]
pub struct TtlSetRequest {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl TtlSetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Request body for PUT /lru
#[derive(Debug, Clone, Deserialize)]
pub struct LruPutRequest {
    pub key: String,
    pub value: String,
}

impl LruPutRequest {
    /// Validates the request key
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_set_request_deserialize() {
        let json = r#"{"key": "test", "value": "hello"}"#;
        let req: TtlSetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.key, "test");
        assert_eq!(req.value, "hello");
        assert!(req.ttl_ms.is_none());
    }

    #[test]
    fn test_ttl_set_request_with_ttl() {
        let json = r#"{"key": "test", "value": "hello", "ttl_ms": 1500}"#;
        let req: TtlSetRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ttl_ms, Some(1500));
    }

    #[test]
    fn test_validate_empty_key() {
        let req = LruPutRequest {
            key: String::new(),
            value: "v".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_key_too_long() {
        let req = TtlSetRequest {
            key: "x".repeat(MAX_KEY_LENGTH + 1),
            value: "v".to_string(),
            ttl_ms: None,
        };
        assert!(req.validate().unwrap().contains("maximum length"));
    }

    #[test]
    fn test_validate_ok() {
        let req = LruPutRequest {
            key: "k".to_string(),
            value: "v".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
