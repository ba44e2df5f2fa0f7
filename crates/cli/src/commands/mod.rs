//! CLI command implementations.

pub mod quote;
pub mod validate;

use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Resolve the settings file from the flag or the configured fallback.
fn settings_path<'a>(
    flag: Option<&'a Path>,
    fallback: Option<&'a PathBuf>,
) -> Result<&'a Path, CliError> {
    flag.or(fallback.map(PathBuf::as_path))
        .ok_or(CliError::MissingSettings)
}
