// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: an optional,
//! read-only `settings.toml` file holding user preferences.
//!
//! The file is never written by the application. When it is missing every
//! value falls back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("settings ignored: {message}");
//! }
//! println!("slideshow every {:?}", config.slideshow.interval());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";

/// General preferences.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Preferred UI language (e.g. `"fr"`). `None` follows the OS locale.
    pub language: Option<String>,
    pub theme_mode: ThemeMode,
}

/// Slideshow preferences.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    pub interval_ms: u64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_SLIDESHOW_INTERVAL_MS,
        }
    }
}

impl SlideshowConfig {
    /// Returns the auto-advance interval, clamped to the accepted range.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(
            self.interval_ms
                .clamp(MIN_SLIDESHOW_INTERVAL_MS, MAX_SLIDESHOW_INTERVAL_MS),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub slideshow: SlideshowConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the user configuration.
///
/// Never fails: a missing file yields the defaults silently, an unreadable
/// or invalid file yields the defaults plus a warning message for the user.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("ignoring settings at {}: {err}", path.display());
            (Config::default(), Some(err.detail().to_string()))
        }
    }
}

/// Loads and parses a settings file at an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|err| Error::Config(err.to_string()))?;
    Ok(toml::from_str(&content)?)
}
