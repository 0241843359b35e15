//! Configuration for the Congress.gov API client.

use crate::error::{CongressError, Result};

/// Default Congress.gov API base URL (v3).
pub const DEFAULT_API_BASE_URL: &str = "https://api.congress.gov/v3";

/// Default HTTP timeout in seconds, applied to every call in the fetch chain.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Placeholder substituted for bill text when a text sub-fetch fails.
pub const TEXT_NOT_AVAILABLE: &str = "Text content not available";

/// Configuration for the Congress.gov client.
///
/// NOTE: Do NOT derive `Debug` on this struct: `api_key` would be exposed.
#[derive(Clone)]
pub struct CongressConfig {
    pub api_key: String,
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl CongressConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("CONGRESS_API_KEY")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CongressError::Config("CONGRESS_API_KEY not set".into()))?;

        let api_base_url = std::env::var("CONGRESS_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = std::env::var("CONGRESS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            api_base_url,
            timeout_secs,
        })
    }

    /// Create a config builder for testing.
    pub fn builder(api_key: impl Into<String>) -> CongressConfigBuilder {
        CongressConfigBuilder {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Builder for constructing `CongressConfig` in tests.
pub struct CongressConfigBuilder {
    api_key: String,
    api_base_url: String,
    timeout_secs: u64,
}

impl CongressConfigBuilder {
    pub fn api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn build(self) -> CongressConfig {
        CongressConfig {
            api_key: self.api_key,
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            timeout_secs: self.timeout_secs,
        }
    }
}
