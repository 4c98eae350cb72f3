mod logging;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Create a temp config directory and set TD_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("TD_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Clear every TD_* override the tests touch
pub(crate) fn clear_overrides() -> Vec<EnvGuard> {
    [
        "TD_REMOTE_URL",
        "TD_REMOTE_API_KEY",
        "TD_REMOTE_TIMEOUT_SECS",
        "TD_LOG_LEVEL",
        "TD_LOG_DIR",
        "TD_LOG_FILE",
        "TD_LOG_COLORED",
        "TD_SESSION_RESTORE_ON_STARTUP",
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}
