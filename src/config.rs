//! Configuration loading and saving.
//!
//! The config lives at `<config dir>/starplay/config.toml`. Setting
//! `STARPLAY_HOME` moves both the config and the data directory (favorites,
//! log file) under that path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the config and data directories.
pub const HOME_ENV: &str = "STARPLAY_HOME";

const APP_DIR: &str = "starplay";
const CONFIG_FILE: &str = "config.toml";
const FAVORITES_FILE: &str = "favorites.json";

/// Errors raised while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine a config directory; set STARPLAY_HOME")]
    NoConfigDir,

    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Player tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Seconds moved by rewind/forward
    pub skip_seconds: f64,
    /// Slider units moved by Up/Down
    pub volume_step: u8,
    /// Inactivity before the controls hide while playing
    pub controls_hide_ms: u64,
    /// Starting volume in slider units
    pub initial_volume: u8,
    /// Interval between time updates from the simulated media
    pub time_update_ms: u64,
    /// Simulated metadata load delay
    pub preload_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            skip_seconds: 10.0,
            volume_step: 10,
            controls_hide_ms: 3000,
            initial_volume: 100,
            time_update_ms: 250,
            preload_ms: 400,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the favorites file location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites_file: Option<PathBuf>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub storage: StorageConfig,
}

impl Config {
    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Reject values the player cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let player = &self.player;
        if !player.skip_seconds.is_finite() || player.skip_seconds <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "player.skip_seconds",
                reason: format!("must be a positive number, got {}", player.skip_seconds),
            });
        }
        if player.initial_volume > 100 {
            return Err(ConfigError::Invalid {
                field: "player.initial_volume",
                reason: format!("must be at most 100, got {}", player.initial_volume),
            });
        }
        if player.volume_step == 0 || player.volume_step > 100 {
            return Err(ConfigError::Invalid {
                field: "player.volume_step",
                reason: format!("must be between 1 and 100, got {}", player.volume_step),
            });
        }
        Ok(())
    }

    /// Directory holding `config.toml`.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Some(home) = home_override() {
            return Ok(home);
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Directory for favorites and the log file.
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        if let Some(home) = home_override() {
            return Ok(home);
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Favorites file, honouring `storage.favorites_file`.
    pub fn favorites_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage.favorites_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join(FAVORITES_FILE)),
        }
    }
}

fn home_override() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
