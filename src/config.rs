//! Rules configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use duel_dots_boxes::{DEFAULT_GRID_SIZE, Topology};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunable rules for every game.
///
/// ```toml
/// [dots_and_boxes]
/// grid_size = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Dots & Boxes settings.
    #[serde(default)]
    dots_and_boxes: DotsConfig,
}

/// Dots & Boxes settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DotsConfig {
    /// Dots per side.
    #[serde(default = "default_grid_size")]
    grid_size: usize,
}

fn default_grid_size() -> usize {
    DEFAULT_GRID_SIZE
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
        }
    }
}

impl DotsConfig {
    /// Builds the grid shape, rejecting unsupported sizes.
    pub fn topology(&self) -> Result<Topology, ConfigError> {
        Topology::new(self.grid_size).map_err(|e| ConfigError::new(e.to_string()))
    }
}

impl RulesConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.dots_and_boxes.topology()?;
        debug!(grid_size = config.dots_and_boxes.grid_size, "Config parsed");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(grid_size = config.dots_and_boxes.grid_size, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a configuration error tagged with the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(*config.dots_and_boxes().grid_size(), DEFAULT_GRID_SIZE);
        assert_eq!(config, RulesConfig::default());
    }

    #[test]
    fn test_grid_size_read() {
        let config = RulesConfig::from_toml_str("[dots_and_boxes]\ngrid_size = 3\n").unwrap();
        let topology = config.dots_and_boxes().topology().unwrap();
        assert_eq!(topology.box_count(), 4);
    }

    #[test]
    fn test_bad_grid_size_rejected() {
        let err = RulesConfig::from_toml_str("[dots_and_boxes]\ngrid_size = 1\n").unwrap_err();
        assert!(err.message.contains("Grid size 1"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = RulesConfig::from_toml_str("[dots_and_boxes\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
