//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPFRONT_LOG_FORMAT` - `text` or `json` (default: text)
//! - `SHOPFRONT_SETTINGS_PATH` - Delivery settings file used when `--settings`
//!   is not given
//! - `RUST_LOG` - Log filter (default: `shopfront_cli=info,shopfront_core=info`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected 'text' or 'json', got '{s}'")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub log_format: LogFormat,
    /// Fallback delivery settings file
    pub settings_path: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_format = match lookup("SHOPFRONT_LOG_FORMAT") {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("SHOPFRONT_LOG_FORMAT".to_string(), e))?,
            None => LogFormat::default(),
        };
        let settings_path = lookup("SHOPFRONT_SETTINGS_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_format,
            settings_path,
        })
    }
}
