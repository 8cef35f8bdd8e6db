use crate::{DEFAULT_LOG_DIRECTORY, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Optional log file name; None logs to stderr.
    pub file: Option<String>,
    /// Directory for log files, relative to the config directory.
    pub dir: String,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file: None,
            dir: DEFAULT_LOG_DIRECTORY.to_string(),
            colored: true,
        }
    }
}
