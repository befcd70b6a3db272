//! Scoring service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::telemetry::Environment;

/// Where and how to reach the RetainAI scoring service
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Endpoint that scores (and records) one profile
    #[serde(default = "default_predict_path")]
    pub predict_path: String,

    /// Client-side timeout for every request, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate scoring service configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let url = self.base_url.trim();
        let is_https = url.starts_with("https://");
        if !is_https && !url.starts_with("http://") {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if *environment == Environment::Production && !is_https {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        if !self.predict_path.starts_with('/') {
            return Err(ValidationError::InvalidPredictPath(self.predict_path.clone()));
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            predict_path: default_predict_path(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_predict_path() -> String {
    "/predict_and_save".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.predict_path, "/predict_and_save");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = ApiConfig {
            base_url: "localhost:8000".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidBaseUrl("localhost:8000".to_string()))
        );
    }

    #[test]
    fn test_production_requires_https() {
        let config = ApiConfig::default();
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::BaseUrlMustBeHttps)
        );

        let config = ApiConfig {
            base_url: "https://retain.example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_validation_invalid_predict_path() {
        let config = ApiConfig {
            predict_path: "predict".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = ApiConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidTimeout)
        );

        let config = ApiConfig {
            request_timeout_secs: 301,
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }
}
