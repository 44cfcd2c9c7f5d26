//! Main configuration for Scout

use crate::config::logging_config::LoggingConfig;
use crate::config::search_defaults::SearchDefaults;
use crate::error::{ScoutError, ScoutResult};
use serde::{Deserialize, Serialize};

/// Main configuration for Scout
///
/// All fields support serde(default) so partial configuration files are
/// completed with defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults applied to search requests
    pub search: SearchDefaults,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> ScoutResult<()> {
        if self.search.max_results == 0 {
            return Err(ScoutError::config("search.max_results must be greater than 0"));
        }

        if self.search.file_types.is_empty() {
            return Err(ScoutError::config("search.file_types must not be empty"));
        }

        if let Some(bad) = self
            .search
            .file_types
            .iter()
            .find(|ext| ext.trim().trim_start_matches('.').is_empty())
        {
            return Err(ScoutError::config(format!(
                "search.file_types contains an empty extension: '{}'",
                bad
            )));
        }

        if !self.logging.has_valid_level() {
            return Err(ScoutError::config(format!(
                "Unknown logging level: {}",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Merge with another configuration
    pub fn merge(&mut self, other: Config) {
        self.search.merge(other.search);
        self.logging.merge(other.logging);
    }
}
