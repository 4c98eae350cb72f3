use td_core::Identity;

use serde::Deserialize;
use uuid::Uuid;

/// Identity row together with its stored password hash.
///
/// Only the sign-in path sees this type; everything past verification works
/// with `Identity`.
#[derive(Clone, Deserialize)]
pub struct CredentialRecord {
    pub id: Uuid,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    /// PHC-formatted salted hash
    pub password_hash: String,
}

impl CredentialRecord {
    pub fn into_identity(self) -> Identity {
        Identity::new(self.id, self.username, self.email)
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
