//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridtoe_core::{BoardSize, Mark};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "gridtoe.toml";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Rows and columns of the board.
    #[serde(default)]
    board_size: BoardSize,

    /// Mark that moves first after every reset.
    #[serde(default)]
    first_mark: Mark,

    /// File receiving logs while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("gridtoe.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::default(),
            first_mark: Mark::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = %config.board_size, first_mark = %config.first_mark, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `gridtoe.toml` in the
    /// working directory is used when present, defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, board_size: Option<BoardSize>, first_mark: Option<Mark>) -> Self {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        if let Some(mark) = first_mark {
            self.first_mark = mark;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
