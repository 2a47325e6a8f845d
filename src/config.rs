//! Shell configuration.
//!
//! The page has no filesystem or environment to read from, so the default
//! configuration ships as `assets/shell.json` and is embedded at build time.

use serde::Deserialize;
use tracing::Level;

use crate::error::{ShellError, ShellResult};

pub const DEFAULT_TITLE: &str = "My Portfolio & Tools";

/// Embedded contents of `assets/shell.json`
pub static EMBEDDED_CONFIG: &str = include_str!("../assets/shell.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Text shown next to the menu toggle in the top bar
    pub title: String,
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ShellConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ShellResult<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.level()?;
        Ok(config)
    }

    /// Load the config embedded in the binary
    pub fn embedded() -> ShellResult<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn level(&self) -> ShellResult<Level> {
        match self.log_level.to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => Err(ShellError::InvalidLogLevel(self.log_level.clone())),
        }
    }
}

/// Install the global log subscriber at `level`. Fails if one is already set.
pub fn init_logger(level: Level) -> ShellResult<()> {
    dioxus::logger::init(level).map_err(|e| ShellError::LoggerInit(e.to_string()))
}
