//! Application configuration.
//!
//! # Responsibility
//! - Describe where the store lives, how verbose logs are, and the canvas
//!   surface geometry.
//! - Load overrides from an optional JSON file; missing fields fall back to
//!   defaults.

use crate::canvas::CanvasConfig;
use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// File name of the SQLite store inside the data directory.
pub const STORE_FILE_NAME: &str = "tripdesk.sqlite3";
/// Sub-directory of the data directory receiving rolling logs.
pub const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AppConfig {
    /// Directory holding the store file and, unless overridden, the logs.
    pub data_dir: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory; `None` uses `<data_dir>/logs`.
    pub log_dir: Option<PathBuf>,
    pub canvas: CanvasConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_level: default_log_level().as_str().to_string(),
            log_dir: None,
            canvas: CanvasConfig::default(),
        }
    }
}

impl AppConfig {
    /// Config rooted at `data_dir` with every other field defaulted.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.canvas.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    pub fn effective_log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join(LOG_DIR_NAME))
    }
}

/// Config load failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Read { path: PathBuf, message: String },
    Parse(String),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, message } => {
                write!(f, "failed to read config `{}`: {message}", path.display())
            }
            Self::Parse(message) => write!(f, "invalid config json: {message}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, STORE_FILE_NAME};
    use std::path::PathBuf;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"data_dir": "/tmp/desk"}"#).unwrap();
        assert_eq!(config.store_path(), PathBuf::from("/tmp/desk").join(STORE_FILE_NAME));
        assert_eq!(config.effective_log_dir(), PathBuf::from("/tmp/desk/logs"));
        assert_eq!(config.canvas.width, 800);
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let err = AppConfig::from_json(r#"{"canvas": {"width": 0, "height": 10}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
