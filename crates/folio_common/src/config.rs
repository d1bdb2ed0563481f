//! Application configuration.
//!
//! Configuration lives in `<config dir>/retrofolio/config.toml`. Every
//! field has a default, a missing file means defaults, and the CLI may
//! override individual values after loading.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::ScreenId;

const CONFIG_DIR: &str = "retrofolio";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Screen shown after boot.
    #[serde(default = "default_start_screen")]
    pub start_screen: ScreenId,

    /// How long a screen transition blocks further navigation.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Boot splash duration.
    #[serde(default = "default_boot_ms")]
    pub boot_ms: u64,

    /// Title flicker: delay before the title text swaps.
    #[serde(default = "default_title_dim_ms")]
    pub title_dim_ms: u64,

    /// Title flicker: settle time after the swap.
    #[serde(default = "default_title_settle_ms")]
    pub title_settle_ms: u64,

    /// Taskbar clock refresh interval.
    #[serde(default = "default_clock_tick_secs")]
    pub clock_tick_secs: u64,

    /// Event loop poll timeout.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long a toast stays on screen.
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,
}

fn default_start_screen() -> ScreenId {
    ScreenId::About
}

fn default_transition_ms() -> u64 {
    400
}

fn default_boot_ms() -> u64 {
    600
}

fn default_title_dim_ms() -> u64 {
    200
}

fn default_title_settle_ms() -> u64 {
    150
}

fn default_clock_tick_secs() -> u64 {
    60
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_toast_ttl_ms() -> u64 {
    2500
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            start_screen: default_start_screen(),
            transition_ms: default_transition_ms(),
            boot_ms: default_boot_ms(),
            title_dim_ms: default_title_dim_ms(),
            title_settle_ms: default_title_settle_ms(),
            clock_tick_secs: default_clock_tick_secs(),
            tick_rate_ms: default_tick_rate_ms(),
            toast_ttl_ms: default_toast_ttl_ms(),
        }
    }
}

impl FolioConfig {
    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing file is not an error.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = match path.or_else(Self::default_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn boot_delay(&self) -> Duration {
        Duration::from_millis(self.boot_ms)
    }

    pub fn title_dim(&self) -> Duration {
        Duration::from_millis(self.title_dim_ms)
    }

    pub fn title_settle(&self) -> Duration {
        Duration::from_millis(self.title_settle_ms)
    }

    pub fn clock_tick(&self) -> Duration {
        Duration::from_secs(self.clock_tick_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }
}
