use td_core::Identity;

use uuid::Uuid;

/// The identity of the current session, if any.
///
/// Only `AuthMachine` transitions write it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    identity: Option<Identity>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn identity_id(&self) -> Option<Uuid> {
        self.identity.as_ref().map(|identity| identity.id)
    }

    pub(crate) fn replace(&mut self, identity: Identity) -> Option<Identity> {
        self.identity.replace(identity)
    }

    pub(crate) fn clear(&mut self) -> Option<Identity> {
        self.identity.take()
    }
}
