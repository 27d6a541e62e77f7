//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LandingConfig {
    /// Redraw interval in milliseconds
    pub tick_rate_ms: Option<u64>,
    /// Capture the mouse for wheel scrolling and nav link clicks
    pub mouse_capture: Option<bool>,
    /// Anchor to scroll to on startup (e.g. "#faq")
    pub start_anchor: Option<String>,
    /// Show key hints in the status bar
    pub show_key_hints: Option<bool>,
}

impl LandingConfig {
    const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);
    /// Fastest redraw allowed; toast and scroll animations run at this rate
    pub const ANIMATION_TICK_RATE: Duration = Duration::from_millis(16);

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ru", "hh", "landing-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(Self::config_path())
    }

    fn load_or_default(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        match Self::config_path() {
            Some(path) => self.save_to(path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, content).map_err(|source| ConfigError::Io { path, source })
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate_ms
            .map(Duration::from_millis)
            .unwrap_or(Self::DEFAULT_TICK_RATE)
            .max(Self::ANIMATION_TICK_RATE)
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(true)
    }

    pub fn show_key_hints(&self) -> bool {
        self.show_key_hints.unwrap_or(true)
    }
}
