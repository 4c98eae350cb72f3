//! Identity entity - the authenticated user's profile record.

use crate::{Avatar, ProfileLinks};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user as stored by the remote data service.
///
/// The password hash is deliberately absent; credential material only travels
/// through `CredentialRecord` in the remote layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<Avatar>,
    #[serde(default)]
    pub links: Option<ProfileLinks>,
}

impl Identity {
    /// Create a freshly registered identity with no profile data
    pub fn new(id: Uuid, username: String, email: Option<String>) -> Self {
        Self {
            id,
            username,
            email,
            bio: None,
            avatar: None,
            links: None,
        }
    }

    /// Name shown in greetings: the email when known, else the username
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.username)
    }
}
