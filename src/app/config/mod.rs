// SPDX-License-Identifier: MPL-2.0
//! `settings.toml`: language, theme, search service and grid layout.
//!
//! ```toml
//! [general]
//! language = "fr"
//! theme_mode = "dark"
//!
//! [api]
//! key = "..."          # PIXABAY_API_KEY and --api-key win over this
//! timeout_secs = 15
//! safesearch = true
//!
//! [display]
//! columns = 4
//! ```
//!
//! Every key is optional. The directory is picked by [`paths`](crate::app::paths).
//!
//! ```no_run
//! use iced_gallery::app::config;
//!
//! // A broken file yields the defaults plus the error that was ignored
//! let (config, problem) = config::load();
//! if let Some(err) = problem {
//!     eprintln!("using defaults: {err}");
//! }
//! println!("{} columns", config.display.columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::infrastructure::pixabay::{PixabaySettings, DEFAULT_ENDPOINT};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// `[general]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Locale such as `fr` or `en-US`. `--lang` wins over it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// `light`, `dark` or `system`, in any case.
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// `[api]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Search endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// API key. `PIXABAY_API_KEY` and `--api-key` take precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs", skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Ask the service to filter explicit content.
    #[serde(default = "default_safesearch", skip_serializing_if = "Option::is_none")]
    pub safesearch: Option<bool>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            key: None,
            timeout_secs: default_timeout_secs(),
            safesearch: default_safesearch(),
        }
    }
}

impl ApiConfig {
    /// Effective timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Builds adapter settings. `key_override` wins over the file's key.
    #[must_use]
    pub fn to_pixabay_settings(&self, key_override: Option<String>) -> PixabaySettings {
        let endpoint = self
            .endpoint
            .clone()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        PixabaySettings {
            endpoint,
            api_key: key_override.or_else(|| self.key.clone()),
            timeout: self.timeout(),
            safesearch: self.safesearch.unwrap_or(true),
        }
    }
}

/// `[display]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Tiles per grid row.
    #[serde(default = "default_columns", skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

impl DisplayConfig {
    /// Effective column count, clamped to the supported range.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
            .unwrap_or(DEFAULT_COLUMNS)
            .clamp(MIN_COLUMNS, MAX_COLUMNS) as usize
    }
}

/// The whole file. A missing section takes its defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_safesearch() -> Option<bool> {
    Some(true)
}

fn default_columns() -> Option<u32> {
    Some(DEFAULT_COLUMNS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    const MODES: &[&str] = &["light", "dark", "system"];

    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        _ => Err(serde::de::Error::unknown_variant(&raw, MODES)),
    }
}

/// Picks the API key from the CLI flag, then the environment.
///
/// Returns `None` when neither is set so the config file's key applies.
#[must_use]
pub fn api_key_override(cli_key: Option<String>) -> Option<String> {
    cli_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| std::env::var(ENV_API_KEY).ok().filter(|k| !k.trim().is_empty()))
}

fn settings_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Reads `settings.toml` from the resolved config directory.
///
/// A missing file is not a problem. An unreadable one is returned next to
/// the default config so the caller can tell the user.
pub fn load() -> (Config, Option<Error>) {
    load_with_override(None)
}

/// Like [`load`], reading from `base_dir` when given.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<Error>) {
    let Some(path) = settings_path(base_dir).filter(|p| p.exists()) else {
        return (Config::default(), None);
    };
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("ignoring unreadable config {}: {err}", path.display());
            (Config::default(), Some(err))
        }
    }
}

/// Parses one settings file. Errors if it is missing or malformed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
