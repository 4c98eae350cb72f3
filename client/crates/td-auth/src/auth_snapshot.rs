use crate::{AuthState, SessionStore};

use td_core::Identity;

use uuid::Uuid;

/// Everything the auth machine publishes on each change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub state: AuthState,
    /// True while an action's remote calls are running
    pub loading: bool,
    /// Last user-displayable message (error or advisory)
    pub message: Option<String>,
    pub session: SessionStore,
}

impl AuthSnapshot {
    pub fn identity(&self) -> Option<&Identity> {
        self.session.current()
    }

    pub fn identity_id(&self) -> Option<Uuid> {
        self.session.identity_id()
    }
}
