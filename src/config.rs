//! Timing configuration for the preview
//!
//! Every delay and step of the choreography lives here so a different pace
//! can be tried without touching the engine. Values are read from
//! `config.toml` and every field falls back to its default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ThemeMode;

const APP_DIR: &str = "soundwave-preview";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub auto_start: bool,
    pub initial_delay_ms: u64,
    pub period_ms: u64,
    pub transition_lead_ms: u64,
    pub transition_settle_ms: u64,
    pub interaction_delay_ms: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            auto_start: true,
            initial_delay_ms: 2000,
            period_ms: 5000,
            transition_lead_ms: 400,
            transition_settle_ms: 800,
            interaction_delay_ms: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub target: String,
    pub char_interval_ms: u64,
    pub search_delay_ms: u64,
    pub download_delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            target: "Harry Styles".to_string(),
            char_interval_ms: 100,
            search_delay_ms: 500,
            download_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub library_delay_ms: u64,
    pub step_percent: f64,
    pub step_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            library_delay_ms: 800,
            step_percent: 0.5,
            step_interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub min_step_percent: f64,
    pub max_step_percent: f64,
    pub step_interval_ms: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            min_step_percent: 1.0,
            max_step_percent: 15.0,
            step_interval_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistConfig {
    pub highlight_delay_ms: u64,
    pub highlight_interval_ms: u64,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            highlight_delay_ms: 1000,
            highlight_interval_ms: 200,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub theme: ThemeMode,
    pub rotation: RotationConfig,
    pub typing: TypingConfig,
    pub playback: PlaybackConfig,
    pub download: DownloadConfig,
    pub playlists: PlaylistConfig,
}

impl PreviewConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from an explicit path, or from the default location when one
    /// exists. A missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rotation = &self.rotation;
        if rotation.period_ms == 0 {
            return Err(ConfigError::Invalid("rotation.period_ms must be positive".into()));
        }
        if rotation.transition_lead_ms + rotation.transition_settle_ms > rotation.period_ms {
            return Err(ConfigError::Invalid(format!(
                "rotation.period_ms ({}) is shorter than the transition ({} + {})",
                rotation.period_ms, rotation.transition_lead_ms, rotation.transition_settle_ms
            )));
        }
        if self.typing.target.trim().is_empty() {
            return Err(ConfigError::Invalid("typing.target must not be blank".into()));
        }
        if self.typing.char_interval_ms == 0 {
            return Err(ConfigError::Invalid("typing.char_interval_ms must be positive".into()));
        }
        if !(self.playback.step_percent > 0.0) || self.playback.step_interval_ms == 0 {
            return Err(ConfigError::Invalid("playback steps must be positive".into()));
        }
        let download = &self.download;
        if !(download.min_step_percent > 0.0) || download.step_interval_ms == 0 {
            return Err(ConfigError::Invalid("download steps must be positive".into()));
        }
        if download.min_step_percent > download.max_step_percent {
            return Err(ConfigError::Invalid(format!(
                "download.min_step_percent ({}) exceeds max_step_percent ({})",
                download.min_step_percent, download.max_step_percent
            )));
        }
        if self.playlists.highlight_interval_ms == 0 {
            return Err(ConfigError::Invalid("playlists.highlight_interval_ms must be positive".into()));
        }
        Ok(())
    }
}

pub(crate) fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}
