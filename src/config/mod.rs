// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! Every field is optional; unset fields fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use toastful::config::{self, Config};
//! use toastful::toast::Position;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Some(Position::BottomRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Resolve what the store consumes
//! let settings = config.store_settings();
//! assert_eq!(settings.default_position, Position::BottomRight);
//! ```

pub mod defaults;

pub use defaults::{
    BLANK_DURATION_MS, DEFAULT_GUTTER, DEFAULT_REMOVAL_DELAY_MS, DRAG_SLOP_PX, EDGE_MARGIN,
    ENTER_ANIMATION_MS, EXIT_ANIMATION_MS, FAILURE_DURATION_MS, MAX_DURATION_MS, MAX_GUTTER, MAX_REMOVAL_DELAY_MS,
    MIN_DURATION_MS, SUCCESS_DURATION_MS, TICK_INTERVAL_MS, WARNING_DURATION_MS,
};

use crate::error::Result;
use crate::store::{KindDurations, StoreSettings};
use crate::toast::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Toastful";

/// Per-kind auto-dismiss overrides, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationsConfig {
    #[serde(default)]
    pub success_ms: Option<u64>,
    #[serde(default)]
    pub failure_ms: Option<u64>,
    #[serde(default)]
    pub warning_ms: Option<u64>,
    #[serde(default)]
    pub blank_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Apply the built-in toast styling. When off, only registered classes
    /// style toasts.
    #[serde(default)]
    pub default_style: Option<bool>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub removal_delay_ms: Option<u64>,
    #[serde(default)]
    pub gutter: Option<f32>,
    #[serde(default)]
    pub durations: DurationsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: Some(true),
            position: None,
            removal_delay_ms: Some(DEFAULT_REMOVAL_DELAY_MS),
            gutter: Some(DEFAULT_GUTTER),
            durations: DurationsConfig::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn default_style(&self) -> bool {
        self.default_style.unwrap_or(true)
    }

    /// Resolves the configuration into store settings, clamping out-of-range
    /// values.
    #[must_use]
    pub fn store_settings(&self) -> StoreSettings {
        let duration = |value: Option<u64>, fallback: u64| {
            Duration::from_millis(
                value
                    .unwrap_or(fallback)
                    .clamp(MIN_DURATION_MS, MAX_DURATION_MS),
            )
        };

        // The record must outlive its exit fade
        let removal_delay = self
            .removal_delay_ms
            .unwrap_or(DEFAULT_REMOVAL_DELAY_MS)
            .clamp(EXIT_ANIMATION_MS, MAX_REMOVAL_DELAY_MS);

        let gutter = self
            .gutter
            .filter(|gutter| gutter.is_finite())
            .unwrap_or(DEFAULT_GUTTER)
            .clamp(0.0, MAX_GUTTER);

        StoreSettings {
            default_position: self.position.unwrap_or_default(),
            durations: KindDurations {
                success: duration(self.durations.success_ms, SUCCESS_DURATION_MS),
                failure: duration(self.durations.failure_ms, FAILURE_DURATION_MS),
                warning: duration(self.durations.warning_ms, WARNING_DURATION_MS),
                blank: duration(self.durations.blank_ms, BLANK_DURATION_MS),
            },
            removal_delay: Duration::from_millis(removal_delay),
            gutter,
        }
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

/// Reads a configuration file. Unparsable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
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
    use crate::toast::{Kind, ToastDuration};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            default_style: Some(false),
            position: Some(Position::BottomLeft),
            removal_delay_ms: Some(1500),
            gutter: Some(12.0),
            durations: DurationsConfig {
                success_ms: Some(1000),
                ..DurationsConfig::default()
            },
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
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn partial_file_keeps_other_fields_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "position = \"top_right\"\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.position, Some(Position::TopRight));
        assert!(loaded.gutter.is_none());
        assert!(loaded.default_style());
        assert_eq!(loaded.store_settings().gutter, DEFAULT_GUTTER);
    }

    #[test]
    fn default_config_resolves_to_default_settings() {
        assert_eq!(Config::default().store_settings(), StoreSettings::default());
    }

    #[test]
    fn store_settings_clamps_out_of_range_values() {
        let config = Config {
            removal_delay_ms: Some(10),
            gutter: Some(500.0),
            durations: DurationsConfig {
                failure_ms: Some(1_000_000),
                warning_ms: Some(1),
                ..DurationsConfig::default()
            },
            ..Config::default()
        };
        let settings = config.store_settings();

        assert_eq!(settings.removal_delay, Duration::from_millis(EXIT_ANIMATION_MS));
        assert_eq!(settings.gutter, MAX_GUTTER);
        assert_eq!(
            settings.durations.for_kind(Some(Kind::Failure)),
            ToastDuration::from_millis(MAX_DURATION_MS)
        );
        assert_eq!(
            settings.durations.for_kind(Some(Kind::Warning)),
            ToastDuration::from_millis(MIN_DURATION_MS)
        );
    }

    #[test]
    fn non_finite_gutter_falls_back_to_default() {
        let config = Config {
            gutter: Some(f32::NAN),
            ..Config::default()
        };
        assert_eq!(config.store_settings().gutter, DEFAULT_GUTTER);
    }
}
