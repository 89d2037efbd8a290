// SPDX-License-Identifier: MPL-2.0
//! This module handles the queue configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use relief_toast::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Show up to three toasts at once
//! config.max_visible = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.max_visible, Some(3));
//! ```

mod defaults;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::queue::{RemovalDelay, VisibleLimit};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ReliefToast";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub max_visible: Option<usize>,
    #[serde(default)]
    pub removal_delay_ms: Option<u64>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_visible: Some(DEFAULT_MAX_VISIBLE),
            removal_delay_ms: Some(DEFAULT_REMOVAL_DELAY_MS),
            diagnostics_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

impl Config {
    /// Returns the configured visible limit, clamped into range.
    #[must_use]
    pub fn visible_limit(&self) -> VisibleLimit {
        VisibleLimit::new(self.max_visible.unwrap_or(DEFAULT_MAX_VISIBLE))
    }

    /// Returns the configured removal delay, clamped into range.
    #[must_use]
    pub fn removal_delay(&self) -> RemovalDelay {
        RemovalDelay::from_millis(self.removal_delay_ms.unwrap_or(DEFAULT_REMOVAL_DELAY_MS))
    }

    /// Returns the configured diagnostics buffer capacity, clamped into range.
    #[must_use]
    pub fn diagnostics_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(
            self.diagnostics_capacity
                .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_queue_settings() {
        let config = Config {
            max_visible: Some(3),
            removal_delay_ms: Some(5_000),
            diagnostics_capacity: Some(64),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_errors_when_file_is_missing() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "max_visible = 4\n").expect("failed to write partial toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.visible_limit().value(), 4);
        assert_eq!(loaded.removal_delay().as_millis(), DEFAULT_REMOVAL_DELAY_MS);
        assert_eq!(
            loaded.diagnostics_capacity().value(),
            DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            max_visible: Some(0),
            removal_delay_ms: Some(u64::MAX),
            diagnostics_capacity: Some(1),
        };
        assert_eq!(config.visible_limit().value(), MIN_MAX_VISIBLE);
        assert_eq!(config.removal_delay().as_millis(), MAX_REMOVAL_DELAY_MS);
        assert_eq!(
            config.diagnostics_capacity().value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
