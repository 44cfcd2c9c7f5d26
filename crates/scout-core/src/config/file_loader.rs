//! File-based configuration loading

use crate::config::model::Config;
use crate::error::{ScoutError, ScoutResult};
use std::fs;
use std::path::Path;

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if the file doesn't exist.
pub fn load_from_file(path: &Path) -> ScoutResult<Config> {
    if !path.exists() {
        tracing::debug!("Config file {} not found, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        ScoutError::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            ScoutError::config(format!("Failed to parse TOML config '{}': {}", path.display(), e))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            ScoutError::config(format!("Failed to parse YAML config '{}': {}", path.display(), e))
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            ScoutError::config(format!("Failed to parse JSON config '{}': {}", path.display(), e))
        })?,
    };

    Ok(config)
}

/// Write configuration to a file, choosing the format by extension
pub fn save_to_file(config: &Config, path: &Path) -> ScoutResult<()> {
    let content = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::to_string_pretty(config)
            .map_err(|e| ScoutError::config(format!("Failed to serialize TOML config: {}", e)))?,
        Some("yaml") | Some("yml") => serde_yaml::to_string(config)
            .map_err(|e| ScoutError::config(format!("Failed to serialize YAML config: {}", e)))?,
        _ => serde_json::to_string_pretty(config)?,
    };

    fs::write(path, content).map_err(|e| {
        ScoutError::config(format!(
            "Failed to write config file '{}': {}",
            path.display(),
            e
        ))
    })
}
