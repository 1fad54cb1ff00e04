//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_DIR` - Directory holding the persisted cart slot
//!   (default: `.cornermarket` under the user's home directory, or the
//!   current directory if home is unset)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart library configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding the persisted cart slot.
    pub storage_dir: PathBuf,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CART_STORAGE_DIR` is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir = storage_dir_from(get_optional_env("CART_STORAGE_DIR"))?;
        Ok(Self { storage_dir })
    }
}

/// Resolve the storage directory from an optional override.
fn storage_dir_from(var: Option<String>) -> Result<PathBuf, ConfigError> {
    match var {
        Some(dir) if dir.is_empty() => Err(ConfigError::InvalidEnvVar(
            "CART_STORAGE_DIR".to_owned(),
            "must not be empty".to_owned(),
        )),
        Some(dir) => Ok(PathBuf::from(dir)),
        None => {
            let base = get_optional_env("HOME").map_or_else(PathBuf::new, PathBuf::from);
            Ok(base.join(".cornermarket"))
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
