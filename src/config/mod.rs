// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The configuration uses a sectioned format:
//!
//! ```toml
//! [network]
//! user_agent = "IcedGiffy/0.1.0"
//! timeout_secs = 30
//! max_redirects = 10
//! max_body_bytes = 33554432
//!
//! [playback]
//! fit = "cover"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use iced_giffy::config::{self, FitMode};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.playback.fit = FitMode::Cover;
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use iced::ContentFit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGiffy";

/// How a decoded GIF is scaled inside the space given to it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    #[default]
    Contain,
    Cover,
    Fill,
    None,
    ScaleDown,
}

impl From<FitMode> for ContentFit {
    fn from(mode: FitMode) -> Self {
        match mode {
            FitMode::Contain => ContentFit::Contain,
            FitMode::Cover => ContentFit::Cover,
            FitMode::Fill => ContentFit::Fill,
            FitMode::None => ContentFit::None,
            FitMode::ScaleDown => ContentFit::ScaleDown,
        }
    }
}

impl FromStr for FitMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "contain" => Ok(FitMode::Contain),
            "cover" => Ok(FitMode::Cover),
            "fill" => Ok(FitMode::Fill),
            "none" => Ok(FitMode::None),
            "scale-down" => Ok(FitMode::ScaleDown),
            other => Err(Error::Config(format!("unknown fit mode '{other}'"))),
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FitMode::Contain => "contain",
            FitMode::Cover => "cover",
            FitMode::Fill => "fill",
            FitMode::None => "none",
            FitMode::ScaleDown => "scale-down",
        };
        f.write_str(name)
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Total request timeout in seconds, clamped to
    /// [`MIN_TIMEOUT_SECS`]..=[`MAX_TIMEOUT_SECS`] when used.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Largest response body accepted, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: u64,
}

impl NetworkConfig {
    /// Request timeout with the configured value clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Display settings for decoded animations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    #[serde(default)]
    pub fit: FitMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_max_body_bytes() -> u64 {
    DEFAULT_MAX_BODY_BYTES
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    match get_default_config_path() {
        Some(path) if path.exists() => load_or_default(&path),
        _ => (Config::default(), None),
    }
}

/// Loads the configuration from `path`, falling back to defaults on failure.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "Could not load config from {}: {err}",
                path.display()
            )),
        ),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
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
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            network: NetworkConfig {
                user_agent: "tester/1.0".to_string(),
                timeout_secs: 5,
                max_redirects: 2,
                max_body_bytes: 4096,
            },
            playback: PlaybackConfig {
                fit: FitMode::Cover,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[network]\ntimeout_secs = 12\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.network.timeout_secs, 12);
        assert_eq!(loaded.network.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(loaded.network.max_redirects, DEFAULT_MAX_REDIRECTS);
        assert_eq!(loaded.network.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(loaded.playback.fit, FitMode::Contain);
    }

    #[test]
    fn load_or_default_warns_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not = = toml").expect("write config");

        let (config, warning) = load_or_default(&config_path);
        assert_eq!(config, Config::default());
        assert!(warning.is_some_and(|w| w.contains("settings.toml")));
    }

    #[test]
    fn timeout_is_clamped() {
        let mut network = NetworkConfig::default();
        network.timeout_secs = 0;
        assert_eq!(network.timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));
        network.timeout_secs = 10_000;
        assert_eq!(network.timeout(), Duration::from_secs(MAX_TIMEOUT_SECS));
    }

    #[test]
    fn fit_mode_parses_kebab_case_names() {
        assert_eq!("scale-down".parse::<FitMode>().ok(), Some(FitMode::ScaleDown));
        assert_eq!("Cover".parse::<FitMode>().ok(), Some(FitMode::Cover));
        assert!("stretch".parse::<FitMode>().is_err());
        assert_eq!(FitMode::ScaleDown.to_string(), "scale-down");
    }
}
