//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `SHELF_DATA_FILE` - Path of the file-backed key-value store (default: shelf-data.json)
//! - `SHELF_PRODUCTS_KEY` - Key holding the product array (default: `ecommerce_products`)
//! - `SHELF_CART_KEY` - Key holding the cart array (default: `ecommerce_cart`)
//! - `SHELF_ID_STRATEGY` - `sequential` or `timestamp` (default: sequential)
//! - `SHELF_SEED_SAMPLE_DATA` - Seed an empty catalog on initialize (default: true)

use std::path::PathBuf;

use thiserror::Error;

/// Default storage key for the product collection.
pub const DEFAULT_PRODUCTS_KEY: &str = "ecommerce_products";
/// Default storage key for the cart collection.
pub const DEFAULT_CART_KEY: &str = "ecommerce_cart";
/// Default path of the file-backed store.
pub const DEFAULT_DATA_FILE: &str = "shelf-data.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How new product IDs are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// One past the largest existing ID.
    #[default]
    Sequential,
    /// Current Unix time in milliseconds, bumped past existing IDs.
    Timestamp,
}

impl IdStrategy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" => Some(Self::Sequential),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }
}

/// Storefront store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the JSON file backing the key-value store
    pub data_file: PathBuf,
    /// Key under which the product array is persisted
    pub products_key: String,
    /// Key under which the cart array is persisted
    pub cart_key: String,
    /// ID assignment strategy for new products
    pub id_strategy: IdStrategy,
    /// Whether `initialize` seeds sample products into an empty catalog
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            products_key: DEFAULT_PRODUCTS_KEY.to_string(),
            cart_key: DEFAULT_CART_KEY.to_string(),
            id_strategy: IdStrategy::default(),
            seed_sample_data: true,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value or
    /// a key variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_file = PathBuf::from(get_env_or_default("SHELF_DATA_FILE", DEFAULT_DATA_FILE));
        let products_key = get_non_empty_env("SHELF_PRODUCTS_KEY", DEFAULT_PRODUCTS_KEY)?;
        let cart_key = get_non_empty_env("SHELF_CART_KEY", DEFAULT_CART_KEY)?;

        let id_strategy = match get_optional_env("SHELF_ID_STRATEGY") {
            Some(raw) => IdStrategy::parse(&raw).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "SHELF_ID_STRATEGY".to_string(),
                    format!("expected 'sequential' or 'timestamp', got '{raw}'"),
                )
            })?,
            None => IdStrategy::default(),
        };

        let seed_sample_data = match get_optional_env("SHELF_SEED_SAMPLE_DATA") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "SHELF_SEED_SAMPLE_DATA".to_string(),
                    format!("expected a boolean, got '{raw}'"),
                )
            })?,
            None => true,
        };

        Ok(Self {
            data_file,
            products_key,
            cart_key,
            id_strategy,
            seed_sample_data,
        })
    }

    /// Replace the data file path, e.g. from a command-line flag.
    #[must_use]
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable that, when present, must not be blank.
fn get_non_empty_env(key: &str, default: &str) -> Result<String, ConfigError> {
    match get_optional_env(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::MissingEnvVar(key.to_string())),
        Some(value) => Ok(value),
        None => Ok(default.to_string()),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
