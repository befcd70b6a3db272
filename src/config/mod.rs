//! Runtime settings for the RetainAI client.
//!
//! Settings come from the process environment (and an optional `.env` file)
//! through the `config` and `dotenvy` crates. Variables use the
//! `RETAIN_AI` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use retain_ai::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Scoring service at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod profile;
mod telemetry;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use profile::ProfileConfig;
pub use telemetry::{Environment, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// development configuration pointing at a local scoring service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scoring service endpoint and timeout
    #[serde(default)]
    pub api: ApiConfig,

    /// Environment, log filter and log format
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Operator input handling
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RETAIN_AI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RETAIN_AI__API__BASE_URL=https://...` -> `api.base_url = https://...`
    /// - `RETAIN_AI__PROFILE__NUMERIC_INPUT=lenient` -> `profile.numeric_input = lenient`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RETAIN_AI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// - base URL scheme (HTTPS in production)
    /// - predict path shape
    /// - timeout bounds
    /// - log filter syntax
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate(&self.telemetry.environment)?;
        self.telemetry.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.telemetry.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::NumericInputPolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 7] = [
        "RETAIN_AI__API__BASE_URL",
        "RETAIN_AI__API__PREDICT_PATH",
        "RETAIN_AI__API__REQUEST_TIMEOUT_SECS",
        "RETAIN_AI__TELEMETRY__ENVIRONMENT",
        "RETAIN_AI__TELEMETRY__LOG_LEVEL",
        "RETAIN_AI__TELEMETRY__JSON_LOGS",
        "RETAIN_AI__PROFILE__NUMERIC_INPUT",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.predict_path, "/predict_and_save");
        assert_eq!(config.telemetry.environment, Environment::Development);
        assert_eq!(config.profile.numeric_input, NumericInputPolicy::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RETAIN_AI__API__BASE_URL", "https://retain.example.com");
        env::set_var("RETAIN_AI__API__REQUEST_TIMEOUT_SECS", "25");
        env::set_var("RETAIN_AI__TELEMETRY__JSON_LOGS", "true");
        env::set_var("RETAIN_AI__PROFILE__NUMERIC_INPUT", "lenient");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://retain.example.com");
        assert_eq!(config.api.request_timeout_secs, 25);
        assert!(config.telemetry.json_logs);
        assert_eq!(config.profile.numeric_input, NumericInputPolicy::Lenient);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RETAIN_AI__TELEMETRY__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
        // The default base URL is plain HTTP
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_policy_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RETAIN_AI__PROFILE__NUMERIC_INPUT", "sloppy");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
