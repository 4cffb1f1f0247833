//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the front-end prints the session after each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board, status line and cursor as text.
    #[default]
    #[display("text")]
    Text,
    /// The whole session as a JSON object per line.
    #[display("json")]
    Json,
}

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Output format.
    #[serde(default)]
    output: OutputFormat,

    /// List the empty squares under the board while a game is running.
    #[serde(default = "default_show_available_moves")]
    show_available_moves: bool,
}

fn default_show_available_moves() -> bool {
    false
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            show_available_moves: default_show_available_moves(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(output = %config.output, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns the config with the output format replaced.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Returns the config with available-move listing turned on or off.
    pub fn with_available_moves(mut self, show: bool) -> Self {
        self.show_available_moves = show;
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
