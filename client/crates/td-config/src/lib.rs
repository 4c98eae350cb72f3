mod config;
mod error;
mod log_level;
mod logging_config;
mod remote_config;
mod session_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use remote_config::RemoteConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

const DEFAULT_CONFIG_DIR: &str = ".td";
const CONFIG_DIR_ENV: &str = "TD_CONFIG_DIR";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_REMOTE_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_RESTORE_ON_STARTUP: bool = true;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
