//! # Client Configuration
//!
//! Configuration for the Longswipe API client. The API key is loaded
//! explicitly or from environment variables; the base URL is selected
//! once by the sandbox flag and never changes for the client's lifetime.

use longswipe_core::{LongswipeError, LongswipeResult};
use std::env;

/// Base URL for the Longswipe sandbox environment
pub const SANDBOX_BASE_URL: &str = "https://sandbox.longswipe.com";

/// Base URL for the Longswipe production environment
pub const PRODUCTION_BASE_URL: &str = "https://api.longswipe.com";

/// Longswipe API configuration
#[derive(Debug, Clone)]
pub struct LongswipeConfig {
    /// Merchant API key
    pub api_key: String,

    /// API base URL (sandbox, production, or a test override)
    pub base_url: String,
}

impl LongswipeConfig {
    /// Create a config from an API key and an environment flag
    pub fn new(api_key: impl Into<String>, sandbox: bool) -> Self {
        let base_url = if sandbox {
            SANDBOX_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        };

        Self {
            api_key: api_key.into(),
            base_url: base_url.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `LONGSWIPE_API_KEY`
    ///
    /// Optional:
    /// - `LONGSWIPE_SANDBOX` ("1" or "true" selects the sandbox)
    pub fn from_env() -> LongswipeResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("LONGSWIPE_API_KEY").map_err(|_| {
            LongswipeError::Configuration("LONGSWIPE_API_KEY not set".to_string())
        })?;

        if api_key.is_empty() {
            return Err(LongswipeError::Configuration(
                "LONGSWIPE_API_KEY is empty".to_string(),
            ));
        }

        let sandbox = env::var("LONGSWIPE_SANDBOX")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self::new(api_key, sandbox))
    }

    /// Builder: set a custom base URL (for testing against a mock server)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Check if this config points at the sandbox
    pub fn is_sandbox(&self) -> bool {
        self.base_url == SANDBOX_BASE_URL
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_flag_selects_base_url() {
        let config = LongswipeConfig::new("sk_test_abc", true);
        assert_eq!(config.base_url, SANDBOX_BASE_URL);
        assert!(config.is_sandbox());

        let config = LongswipeConfig::new("sk_live_abc", false);
        assert_eq!(config.base_url, PRODUCTION_BASE_URL);
        assert!(!config.is_sandbox());
    }

    #[test]
    fn test_auth_header() {
        let config = LongswipeConfig::new("my-api-key", true);
        assert_eq!(config.auth_header(), "Bearer my-api-key");
    }

    #[test]
    fn test_with_base_url_override() {
        let config = LongswipeConfig::new("key", true).with_base_url("http://127.0.0.1:9999");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
        assert!(!config.is_sandbox());
    }

    // Serializes tests that mutate process-wide environment variables
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn test_from_env_rejects_empty_key() {
        let _guard = ENV_LOCK.lock().unwrap();
        let saved = env::var("LONGSWIPE_API_KEY").ok();

        // dotenvy never overrides an already-set variable, so an ambient
        // .env file cannot turn this into a valid key
        env::set_var("LONGSWIPE_API_KEY", "");
        let result = LongswipeConfig::from_env();

        match saved {
            Some(value) => env::set_var("LONGSWIPE_API_KEY", value),
            None => env::remove_var("LONGSWIPE_API_KEY"),
        }

        assert!(matches!(result, Err(LongswipeError::Configuration(_))));
    }
}
