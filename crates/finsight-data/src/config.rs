//! Configuration for the statements client

use crate::error::{DataError, Result};
use std::time::Duration;

const DEFAULT_FMP_API_BASE: &str = "https://financialmodelingprep.com/api/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Financial Modeling Prep client
///
/// Constructed explicitly and passed into the client; there is no
/// process-wide key singleton.
#[derive(Debug, Clone)]
pub struct FmpConfig {
    /// API key for the statements endpoint
    pub api_key: String,

    /// Base URL (default: "https://financialmodelingprep.com/api/v3")
    pub api_base: String,

    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl FmpConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_FMP_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from environment variables
    ///
    /// Reads the API key from `FMP_API_KEY`. Optionally reads the base URL
    /// from `FMP_API_BASE` if set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("FMP_API_KEY").map_err(|_| {
            DataError::ConfigError("FMP_API_KEY environment variable not set".to_string())
        })?;

        let api_base =
            std::env::var("FMP_API_BASE").unwrap_or_else(|_| DEFAULT_FMP_API_BASE.to_string());

        Ok(Self {
            api_key,
            api_base,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Set custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
