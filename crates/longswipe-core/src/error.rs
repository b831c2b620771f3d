//! # Longswipe Error Types
//!
//! Typed error handling for the Longswipe API client.
//! All client operations return `Result<T, LongswipeError>`.

use serde_json::Value;
use thiserror::Error;

/// Fallback message used when an error response carries no `message` field
/// or its body is not valid JSON.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Core error type for all Longswipe API operations
#[derive(Debug, Error)]
pub enum LongswipeError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The API answered with a non-200 HTTP status
    #[error("Longswipe API error (HTTP {status}): {message}")]
    Api {
        /// Human-readable message from the error envelope
        message: String,
        /// Literal HTTP status code returned by the API
        status: u16,
        /// Full parsed error body, when the body was valid JSON
        error_data: Option<Value>,
    },

    /// Transport failure before any HTTP status was received
    /// (connection refused, DNS failure, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// A 200 response carried a body that is not valid JSON
    #[error("Decode error: {0}")]
    Decode(String),
}

impl LongswipeError {
    /// Returns the HTTP status code, if the API answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            LongswipeError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, LongswipeError::Network(_))
    }

    /// Returns the structured error payload, if the API sent one
    pub fn error_data(&self) -> Option<&Value> {
        match self {
            LongswipeError::Api { error_data, .. } => error_data.as_ref(),
            _ => None,
        }
    }
}

/// Result type alias for Longswipe operations
pub type LongswipeResult<T> = Result<T, LongswipeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_status() {
        let err = LongswipeError::Api {
            message: "Email already exists".to_string(),
            status: 400,
            error_data: Some(json!({"message": "Email already exists"})),
        };
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_retryable());
        assert_eq!(
            err.error_data().unwrap()["message"],
            "Email already exists"
        );
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = LongswipeError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(err.is_retryable());
        assert!(err.error_data().is_none());
    }

    #[test]
    fn test_error_display() {
        let err = LongswipeError::Api {
            message: UNKNOWN_ERROR_MESSAGE.to_string(),
            status: 500,
            error_data: None,
        };
        assert_eq!(
            err.to_string(),
            "Longswipe API error (HTTP 500): Unknown error"
        );
    }
}
