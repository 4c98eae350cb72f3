use crate::{AuthError, AuthSnapshot, AuthState, Result as AuthResult};

use log::{debug, warn};
use tokio::sync::watch;

/// Result of a successful action body, applied by `ActionClaim::settle`.
pub(crate) struct Settled {
    pub(crate) state: AuthState,
    pub(crate) notice: Option<&'static str>,
}

impl Settled {
    pub(crate) fn quiet(state: AuthState) -> Self {
        Self {
            state,
            notice: None,
        }
    }
}

/// The `loading` flag held by the one action in flight.
///
/// Releasing the claim publishes the action's outcome. A claim dropped
/// without release (the action future was cancelled) clears `loading` and
/// puts the origin state back, leaving the message untouched.
pub(crate) struct ActionClaim<'a> {
    snapshot: &'a watch::Sender<AuthSnapshot>,
    origin: AuthState,
    released: bool,
}

impl<'a> ActionClaim<'a> {
    /// Claim `loading`, or `None` when another action holds it
    pub(crate) fn acquire(snapshot: &'a watch::Sender<AuthSnapshot>) -> Option<Self> {
        let mut origin = None;

        snapshot.send_if_modified(|snapshot| {
            if snapshot.loading {
                return false;
            }
            let resolved = snapshot.state.resolved().clone();
            snapshot.state = resolved.clone();
            snapshot.loading = true;
            snapshot.message = None;
            origin = Some(resolved);
            true
        });

        origin.map(|origin| Self {
            snapshot,
            origin,
            released: false,
        })
    }

    /// The settled state the action started from
    pub(crate) fn origin(&self) -> &AuthState {
        &self.origin
    }

    /// Move the state a cancellation falls back to
    pub(crate) fn rebase(&mut self, origin: AuthState) {
        self.origin = origin;
    }

    pub(crate) fn release(mut self, state: AuthState, message: Option<String>) {
        self.released = true;
        self.snapshot.send_modify(|snapshot| {
            snapshot.state = state;
            snapshot.loading = false;
            snapshot.message = message;
        });
    }

    /// Publish a failure. Only remote failures become an `Error` state.
    pub(crate) fn fail(self, err: AuthError) -> AuthError {
        let message = err.user_message().to_string();

        let state = if err.is_remote_failure() {
            warn!("{err}");
            AuthState::error(message.clone(), self.origin.clone())
        } else {
            debug!("{err}");
            self.origin.clone()
        };

        self.release(state, Some(message));
        err
    }

    pub(crate) fn settle(self, result: AuthResult<Settled>) -> AuthResult<AuthState> {
        match result {
            Ok(settled) => {
                self.release(settled.state.clone(), settled.notice.map(String::from));
                Ok(settled.state)
            }
            Err(err) => Err(self.fail(err)),
        }
    }
}

impl Drop for ActionClaim<'_> {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        debug!("Auth action cancelled, returning to {}", self.origin);
        let origin = self.origin.clone();
        self.snapshot.send_modify(|snapshot| {
            snapshot.state = origin;
            snapshot.loading = false;
        });
    }
}
