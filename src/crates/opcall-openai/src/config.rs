//! Configuration for the OpenAI gateway.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default chat-completions API base.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable overriding the API base (proxies, regional
/// endpoints, test servers).
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Configuration for [`OpenAiGateway`].
///
/// The API key is deliberately not part of the config. It travels with each
/// gateway call.
///
/// [`OpenAiGateway`]: crate::OpenAiGateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// Request timeout duration.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Organization ID (optional).
    pub organization: Option<String>,
}

impl OpenAiConfig {
    /// Create a configuration against the given API base.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: default_timeout(),
            organization: None,
        }
    }

    /// Create a configuration from the environment, falling back to the
    /// public API base when no override is set.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the organization ID.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OpenAiConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.organization.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = OpenAiConfig::new("http://localhost:8080/v1")
            .with_timeout(Duration::from_secs(10))
            .with_organization("org-123");

        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.organization, Some("org-123".to_string()));
    }
}
