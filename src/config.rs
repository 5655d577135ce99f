//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.
//! The configuration carries operator-wide settings: a default catalog
//! location and overrides for the management-system script vocabulary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::script::ScriptVocabulary;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Default catalog location used when `--catalog` is omitted.
    pub catalog: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system locations.
    #[serde(default)]
    pub paths: PathConfig,
    /// Script vocabulary of the target management system.
    #[serde(default)]
    pub vocabulary: ScriptVocabulary,
}

impl Config {
    /// Gets the platform config directory for the application.
    ///
    /// - Linux: `~/.config/rupgen/`
    /// - macOS: `~/Library/Application Support/rupgen/`
    /// - Windows: `%APPDATA%\rupgen\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine platform config directory")?;
        Ok(base.join("rupgen"))
    }

    /// Gets the config file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks whether a config file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration from the platform config file.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Loads the configuration, falling back to defaults when absent or
    /// unreadable.
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Saves the configuration, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_vocabulary_override() {
        let config: Config = toml::from_str(
            r#"
            [vocabulary]
            obj_group = "Anu"
            name_delimiter = ","
            "#,
        )
        .unwrap();
        assert_eq!(config.vocabulary.obj_group, "Anu");
        assert_eq!(config.vocabulary.name_delimiter, ",");
        // Untouched tokens keep their defaults.
        assert_eq!(config.vocabulary.attr_tilt, "tilt");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
