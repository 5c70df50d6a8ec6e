//! TUI configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Input;
use tracing::{debug, instrument};

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// File receiving log output; the terminal itself is never logged to.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    log_level: String,

    /// Key names bound to each input.
    keys: KeyBindings,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            log_level: "info".to_string(),
            keys: KeyBindings::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces file values with any command-line overrides.
    pub fn with_overrides(mut self, log_file: Option<PathBuf>, log_level: Option<String>) -> Self {
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        self
    }
}

/// Key names for each input, e.g. `"left"`, `"h"`, `"ctrl+c"`.
///
/// Defaults follow arrow keys plus vim-style `h j k l`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Move left.
    pub left: Vec<String>,
    /// Move right.
    pub right: Vec<String>,
    /// Move up.
    pub up: Vec<String>,
    /// Move down.
    pub down: Vec<String>,
    /// Place a mark.
    pub commit: Vec<String>,
    /// Start a new game.
    pub restart: Vec<String>,
    /// Quit.
    pub quit: Vec<String>,
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: keys(&["left", "h"]),
            right: keys(&["right", "l"]),
            up: keys(&["up", "k"]),
            down: keys(&["down", "j"]),
            commit: keys(&["enter", "space"]),
            restart: keys(&["r"]),
            quit: keys(&["q", "ctrl+c"]),
        }
    }
}

impl KeyBindings {
    /// Key names bound to `input`.
    pub fn for_input(&self, input: Input) -> &[String] {
        match input {
            Input::Left => &self.left,
            Input::Right => &self.right,
            Input::Up => &self.up,
            Input::Down => &self.down,
            Input::Commit => &self.commit,
            Input::Restart => &self.restart,
            Input::Quit => &self.quit,
        }
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
