//! Configuration loading from disk.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::{LocalizationConfig, RouteManifest};
use crate::config::validation::{validate_config, validate_manifest, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate localization settings from a TOML file.
pub fn load_config(path: &Path) -> Result<LocalizationConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: LocalizationConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate a route manifest from a TOML file.
pub fn load_manifest(path: &Path) -> Result<RouteManifest, ConfigError> {
    let content = fs::read_to_string(path)?;
    let manifest: RouteManifest = toml::from_str(&content)?;

    validate_manifest(&manifest).map_err(ConfigError::Validation)?;

    Ok(manifest)
}
