//! Application configuration
//!
//! Loaded from a TOML file; every field has a default so a missing file or a
//! partial one is fine. The API key can also come from `OWM_API_KEY`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::types::{ChartKind, Units};

pub const CONFIG_ENV: &str = "WEATHERCAST_CONFIG";
pub const API_KEY_ENV: &str = "OWM_API_KEY";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing config in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,

    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Icon base URL (default: <https://openweathermap.org/img/wn>)
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_icon_base_url() -> String {
    "https://openweathermap.org/img/wn".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            icon_base_url: default_icon_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Initial selections of the dashboard widgets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub chart: ChartKind,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// The first existing file among `explicit`, `$WEATHERCAST_CONFIG` and
    /// `<config dir>/weathercast/config.toml` is used; defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(path) = explicit {
            candidates.push(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            candidates.push(PathBuf::from(path));
        }
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join("weathercast").join("config.toml"));
        }

        let mut config = match candidates.into_iter().find(|path| path.exists()) {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration");
                Self::from_file(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                Self::default()
            }
        };

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.apply_api_key(key);
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override the configured API key with a non-blank value.
    pub fn apply_api_key(&mut self, key: String) {
        let key = key.trim();
        if !key.is_empty() {
            self.provider.api_key = key.to_string();
        }
    }
}
