use crate::{RemoteError, RemoteResult};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File name of the persisted session inside the config directory
pub const SESSION_FILENAME: &str = "session.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    identity_id: Uuid,
}

/// The session identity id kept on disk between runs
#[derive(Debug, Clone)]
pub(crate) struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored identity id. A missing or unreadable file means no session.
    pub(crate) fn load(&self) -> RemoteResult<Option<Uuid>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RemoteError::session_file(&self.path, e)),
        };

        match serde_json::from_str::<StoredSession>(&contents) {
            Ok(stored) => {
                debug!("Loaded session from {}", self.path.display());
                Ok(Some(stored.identity_id))
            }
            Err(e) => {
                warn!("Ignoring corrupt session file {}: {e}", self.path.display());
                Ok(None)
            }
        }
    }

    pub(crate) fn save(&self, identity_id: Uuid) -> RemoteResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RemoteError::session_file(parent, e))?;
        }

        let contents = serde_json::to_string(&StoredSession { identity_id })?;
        std::fs::write(&self.path, contents).map_err(|e| RemoteError::session_file(&self.path, e))
    }

    pub(crate) fn remove(&self) -> RemoteResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RemoteError::session_file(&self.path, e)),
        }
    }
}
