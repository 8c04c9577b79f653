// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! toast preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.settle_delay_ms = Some(300);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.settle_delay_ms, Some(300));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
use crate::toast::{Settings, Toast, ToastKind, ToastPosition, ToastTheme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_duration_secs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_kind: Option<ToastKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_theme: Option<ToastTheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_position: Option<ToastPosition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay_ms: Some(defaults::DEFAULT_SETTLE_DELAY_MS),
            default_duration_secs: Some(defaults::DEFAULT_TOAST_DURATION_SECS),
            default_kind: None,
            default_theme: None,
            default_position: None,
        }
    }
}

impl Config {
    /// Returns the settle delay, clamped to the supported range.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        let ms = self
            .settle_delay_ms
            .unwrap_or(defaults::DEFAULT_SETTLE_DELAY_MS)
            .clamp(defaults::MIN_SETTLE_DELAY_MS, defaults::MAX_SETTLE_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Returns the coordinator settings derived from this configuration.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            settle_delay: self.settle_delay(),
        }
    }

    /// Builds a toast with the configured defaults applied.
    pub fn toast(&self, title: impl Into<String>) -> Toast {
        Toast::new(title)
            .with_kind(self.default_kind.unwrap_or_default())
            .with_theme(self.default_theme.unwrap_or_default())
            .with_position(self.default_position.unwrap_or_default())
            .with_duration_secs(
                self.default_duration_secs
                    .unwrap_or(defaults::DEFAULT_TOAST_DURATION_SECS),
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

/// Loads a configuration file. Unparseable content falls back to the default
/// configuration; only I/O failures are reported as errors.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid toast settings, using defaults");
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
