use serde::Serialize;

/// Row inserted on sign-up.
#[derive(Clone, Serialize)]
pub struct NewIdentity {
    pub username: String,
    pub email: String,
    /// PHC-formatted salted hash; the plaintext never leaves the client
    pub password_hash: String,
}

impl std::fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewIdentity")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
