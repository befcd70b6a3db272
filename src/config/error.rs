//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid scoring service URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Scoring service URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Invalid predict path (must start with '/'): {0}")]
    InvalidPredictPath(String),

    #[error("Invalid request timeout (must be 1-300 seconds)")]
    InvalidTimeout,

    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidLogLevel { directive: String, reason: String },
}
