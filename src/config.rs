// SPDX-License-Identifier: MPL-2.0
//! Image element configuration: placeholder sizes and the optional width cap,
//! persisted to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_image_element::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.max_width = Some(320.0);
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "iced_image_element";

/// Placeholder dimension before an image resolves (images report no size).
pub const DEFAULT_INITIAL_DIMENSION: f32 = 0.0;

/// Box around the loading spinner when no placeholder size is configured.
pub const LOADING_PLACEHOLDER_SIZE: f32 = 32.0;

/// Fixed square used for the error placeholder.
pub const ERROR_PLACEHOLDER_SIZE: f32 = 50.0;

/// Pixel-density ratio assumed when the host does not supply one.
pub const DEFAULT_SCALE_FACTOR: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Placeholder width shown before the intrinsic size is known.
    #[serde(default)]
    pub initial_width: f32,
    /// Placeholder height shown before the intrinsic size is known.
    #[serde(default)]
    pub initial_height: f32,
    /// Cap applied to intrinsically-queried images.
    #[serde(default)]
    pub max_width: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_width: DEFAULT_INITIAL_DIMENSION,
            initial_height: DEFAULT_INITIAL_DIMENSION,
            max_width: None,
        }
    }
}

impl Config {
    /// The configured pre-resolution placeholder size as a pair.
    #[must_use]
    pub fn initial_dimensions(&self) -> (f32, f32) {
        (self.initial_width, self.initial_height)
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
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
