mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod owner_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use owner_config::OwnerConfig;

const DEFAULT_DATABASE_FILENAME: &str = "auth.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";
