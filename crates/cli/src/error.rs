//! CLI error type.

use std::path::PathBuf;

use shopfront_core::delivery::{GeofenceError, MinimumOrderError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Neither `--settings` nor `SHOPFRONT_SETTINGS_PATH` was given.
    #[error("No delivery settings file (pass --settings or set SHOPFRONT_SETTINGS_PATH)")]
    MissingSettings,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Customer coordinates were given but the store has none.
    #[error("Store location is not configured; pass --distance-km instead")]
    MissingStoreLocation,

    #[error(transparent)]
    MinimumOrder(#[from] MinimumOrderError),

    #[error(transparent)]
    Geofence(#[from] GeofenceError),

    #[error("Settings have {0} slab problem(s)")]
    InvalidSlabs(usize),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}
