use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_AVATAR_MIME_TYPE: &str = "image/jpeg";

/// Opaque avatar blob as stored on the identity row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub uri: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(rename = "name")]
    pub file_name: String,
}

impl Avatar {
    /// Build the avatar record for an image picked by `identity_id`.
    ///
    /// The file name embeds the owner and the pick time in milliseconds,
    /// e.g. `avatar-<uuid>-1704067200000.jpg`.
    pub fn picked(identity_id: Uuid, uri: impl Into<String>, picked_at_millis: i64) -> Self {
        Self {
            uri: uri.into(),
            mime_type: String::from(DEFAULT_AVATAR_MIME_TYPE),
            file_name: format!("avatar-{identity_id}-{picked_at_millis}.jpg"),
        }
    }

    /// Override the MIME type reported for the picked image
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}
