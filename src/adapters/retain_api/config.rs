//! Connection settings shared by the RetainAI HTTP adapters.

use reqwest::Client;
use std::time::Duration;

use crate::config::ApiConfig;

/// Configuration for the RetainAI HTTP adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainApiConfig {
    /// Base URL of the service (default: http://localhost:8000).
    pub base_url: String,
    /// Scoring endpoint (default: /predict_and_save).
    pub predict_path: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl RetainApiConfig {
    /// Creates a configuration for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            predict_path: "/predict_and_save".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the scoring endpoint.
    pub fn with_predict_path(mut self, path: impl Into<String>) -> Self {
        self.predict_path = path.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout.as_secs()
    }

    /// Builds an HTTP client with the configured timeout.
    pub fn build_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder().timeout(self.timeout).build()
    }
}

impl Default for RetainApiConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

impl From<&ApiConfig> for RetainApiConfig {
    fn from(config: &ApiConfig) -> Self {
        Self::new(config.base_url.as_str())
            .with_predict_path(config.predict_path.as_str())
            .with_timeout(config.timeout())
    }
}
