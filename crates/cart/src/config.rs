//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPCART_INVENTORY_URL` - Base URL of the inventory service
//!
//! ## Optional
//! - `SHOPCART_STORAGE_PATH` - Path of the persisted cart file (default: shopcart.json)
//! - `SHOPCART_HTTP_TIMEOUT_SECS` - Inventory request timeout in seconds (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_STORAGE_PATH: &str = "shopcart.json";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Base URL of the inventory service (stock and products endpoints)
    pub inventory_url: Url,
    /// Path of the file holding the persisted cart payload
    pub storage_path: PathBuf,
    /// Timeout applied to each inventory request
    pub http_timeout: Duration,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let inventory_url = parse_inventory_url(&get_required_env("SHOPCART_INVENTORY_URL")?)?;
        let storage_path =
            PathBuf::from(get_env_or_default("SHOPCART_STORAGE_PATH", DEFAULT_STORAGE_PATH));
        let http_timeout = parse_timeout_secs(get_optional_env("SHOPCART_HTTP_TIMEOUT_SECS"))?;

        Ok(Self {
            inventory_url,
            storage_path,
            http_timeout,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate the inventory service base URL.
fn parse_inventory_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("SHOPCART_INVENTORY_URL".to_string(), e.to_string()))
}

/// Parse the HTTP timeout, falling back to the default when unset.
fn parse_timeout_secs(raw: Option<String>) -> Result<Duration, ConfigError> {
    let secs = match raw {
        Some(value) => value.parse::<u64>().map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPCART_HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?,
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs))
}
