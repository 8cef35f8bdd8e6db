use crate::{ConfigError, ConfigErrorResult, DatabaseConfig, LogLevel, LoggingConfig, OwnerConfig};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub owner: OwnerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for RN_CONFIG_DIR env var, else use ./.rn/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply RN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RN_CONFIG_DIR env var > ./.rn/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("RN_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".rn"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(ids) = std::env::var("RN_OWNER_IDS") {
            self.owner.ids = ids
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect();
        }

        if let Ok(path) = std::env::var("RN_DATABASE_PATH") {
            self.database.path = path;
        }

        if let Ok(level) = std::env::var("RN_LOG_LEVEL") {
            // FromStr never fails; invalid values fall back to Info
            self.logging.level = LogLevel::from_str(&level).unwrap();
        }

        if let Ok(file) = std::env::var("RN_LOG_FILE") {
            self.logging.file = if file.is_empty() { None } else { Some(file) };
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::config(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.owner.ids.iter().any(|id| id.is_empty()) {
            return Err(ConfigError::config("owner.ids must not contain empty ids"));
        }

        if self.owner.ids.iter().any(|id| id.len() > 64) {
            return Err(ConfigError::config(
                "owner.ids entries are limited to 64 characters",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// One-line startup summary; never logs owner identifiers in full.
    pub fn log_summary(&self) {
        info!(
            "Config: owners={}, database={}, log_level={:?}, log_file={}",
            self.owner.ids.len(),
            self.database.path,
            *self.logging.level,
            self.logging.file.as_deref().unwrap_or("stderr"),
        );
    }
}
