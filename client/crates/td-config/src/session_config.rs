use crate::DEFAULT_RESTORE_ON_STARTUP;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Ask the remote client for a cached session at startup
    pub restore_on_startup: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            restore_on_startup: DEFAULT_RESTORE_ON_STARTUP,
        }
    }
}
