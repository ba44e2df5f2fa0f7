//! Loading settings and cart files.
//!
//! Files ending in `.json` are parsed as JSON; anything else as YAML.

use std::path::Path;

use serde::de::DeserializeOwned;
use shopfront_core::{CartItem, DeliverySettings};
use tracing::debug;

use crate::error::CliError;

/// Parse `content` as JSON or YAML depending on `path`'s extension.
fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T, CliError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| CliError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Loaded file");
    parse(path, &content)
}

/// Load a tenant's delivery settings record.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_settings(path: &Path) -> Result<DeliverySettings, CliError> {
    load(path)
}

/// Load a cart as a list of items.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_cart(path: &Path) -> Result<Vec<CartItem>, CliError> {
    load(path)
}
