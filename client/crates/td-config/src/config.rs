use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, RemoteConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub remote: RemoteConfig,
    pub logging: LoggingConfig,
    pub session: SessionConfig,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for TD_CONFIG_DIR env var, else use ./.td/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply TD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from_dir(&config_dir)
    }

    /// Load config from an explicit directory, then apply env overrides.
    pub fn load_from_dir(config_dir: &Path) -> ConfigErrorResult<Self> {
        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TD_CONFIG_DIR env var > ./.td/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.remote.validate()?;

        let log_dir = Path::new(&self.logging.dir);
        if log_dir.is_absolute() || self.logging.dir.contains("..") {
            return Err(ConfigError::logging(
                "logging.dir must be relative and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.logging.file
            && (file.is_empty() || file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be a bare file name, got '{file}'"
            )));
        }

        Ok(())
    }

    /// Resolve the log file path under `config_dir`, if file logging is on.
    pub fn log_file_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| config_dir.join(&self.logging.dir).join(file))
    }

    /// Where log lines go: the configured file name, or stderr.
    pub fn log_destination(&self) -> &str {
        self.logging.file.as_deref().unwrap_or("stderr")
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  remote: {} (api key: {}, timeout {}s)",
            self.remote.url,
            if self.remote.api_key.is_some() {
                "set"
            } else {
                "missing"
            },
            self.remote.timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.log_destination()
        );
        info!(
            "  session: restore_on_startup={}",
            self.session.restore_on_startup
        );
    }

    fn apply_env_overrides(&mut self) {
        // Remote
        Self::apply_env_string("TD_REMOTE_URL", &mut self.remote.url);
        Self::apply_env_option_string("TD_REMOTE_API_KEY", &mut self.remote.api_key);
        Self::apply_env_parse("TD_REMOTE_TIMEOUT_SECS", &mut self.remote.timeout_secs);

        // Logging
        Self::apply_env_parse("TD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("TD_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("TD_LOG_FILE", &mut self.logging.file);
        Self::apply_env_bool("TD_LOG_COLORED", &mut self.logging.colored);

        // Session
        Self::apply_env_bool(
            "TD_SESSION_RESTORE_ON_STARTUP",
            &mut self.session.restore_on_startup,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
