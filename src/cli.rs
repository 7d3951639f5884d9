use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, PreviewConfig};
use crate::model::ThemeMode;

/// SoundWave - an animated phone preview of the SoundWave music app 🎵
#[derive(Parser, Debug)]
#[command(name = "soundwave-preview", version, about)]
pub struct Args {
    /// Path to a config.toml (defaults to the user config directory)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Seed for transition styles and download steps
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start in manual mode, without automatic rotation
    #[arg(long, short = 'm')]
    pub manual: bool,

    /// Time between automatic screen changes, in milliseconds
    #[arg(long)]
    pub period_ms: Option<u64>,

    /// Color scheme of the mockup
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Print every state change as a JSON line instead of drawing
    #[arg(long)]
    pub headless: bool,

    /// How long headless mode runs before unmounting
    #[arg(long, default_value_t = 30)]
    pub duration_secs: u64,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}

impl Args {
    /// Load the config file and layer the command line on top
    pub fn resolve_config(&self) -> Result<PreviewConfig, ConfigError> {
        let config = PreviewConfig::load(self.config.as_deref())?;
        self.apply(config)
    }

    pub fn apply(&self, mut config: PreviewConfig) -> Result<PreviewConfig, ConfigError> {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.manual {
            config.rotation.auto_start = false;
        }
        if let Some(period_ms) = self.period_ms {
            config.rotation.period_ms = period_ms;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        config.validate()?;
        Ok(config)
    }
}
