//! The authentication state machine.
//!
//! `AuthMachine` owns the session and publishes an `AuthSnapshot` on a
//! watch channel after every change. Actions take `&self` so the machine
//! can be shared; only one action runs at a time, claimed through the
//! snapshot's `loading` flag. A second action while one is in flight gets
//! `AuthError::Busy` without touching the remote service. Cancelling an
//! action (dropping its future) releases the flag and restores the state
//! it started from.
//!
//! Failure handling:
//! - validation, credential and not-signed-in failures keep the settled
//!   state and set the message
//! - remote failures move to `AuthState::Error` on top of the settled state
//! - a failed completeness lookup counts as an incomplete profile

use crate::action_claim::{ActionClaim, Settled};
use crate::password::{hash_password_blocking, verify_password_blocking};
use crate::{
    AuthError, AuthSnapshot, AuthState, PROFILE_SAVED_NOTICE, Result as AuthResult,
    SIGN_UP_NOTICE,
};

use td_core::{
    Identity, ProfileForm, ProfileLinks, SignInForm, SignUpForm, is_profile_complete,
};
use td_remote::{NewIdentity, ProfileUpdate, RemoteDataService};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use tokio::sync::watch;

const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";
const PROFILE_LOAD_FAILED: &str = "Failed to load profile";

pub struct AuthMachine {
    remote: Arc<dyn RemoteDataService>,
    snapshot: watch::Sender<AuthSnapshot>,
}

impl AuthMachine {
    pub fn new(remote: Arc<dyn RemoteDataService>) -> Self {
        let (snapshot, _) = watch::channel(AuthSnapshot::default());
        Self { remote, snapshot }
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn state(&self) -> AuthState {
        self.snapshot.borrow().state.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.borrow().loading
    }

    pub fn message(&self) -> Option<String> {
        self.snapshot.borrow().message.clone()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.snapshot.borrow().session.current().cloned()
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Restore an existing remote session, if there is one
    pub async fn initialize(&self) -> AuthResult<AuthState> {
        let claim = self.begin()?;

        let settled = match self.remote.get_current_session().await {
            Ok(Some(identity)) => {
                info!("Restoring session for {}", identity.id);
                self.publish_state(AuthState::Authenticating);
                Settled::quiet(self.settle_signed_in(identity).await)
            }
            Ok(None) => {
                info!("No session found");
                Settled::quiet(AuthState::SignedOut)
            }
            Err(e) => {
                warn!("Session lookup failed, starting signed out: {e}");
                Settled::quiet(AuthState::SignedOut)
            }
        };

        claim.settle(Ok(settled))
    }

    /// Register a new identity. Does not sign in.
    pub async fn sign_up(&self, form: &SignUpForm) -> AuthResult<AuthState> {
        let claim = self.begin()?;
        let result = self.run_sign_up(form, claim.origin().clone()).await;
        claim.settle(result)
    }

    pub async fn sign_in(&self, form: &SignInForm) -> AuthResult<AuthState> {
        let claim = self.begin()?;
        let result = self.run_sign_in(form).await;
        claim.settle(result)
    }

    /// Write the profile form and re-evaluate completeness.
    ///
    /// A successful write that leaves the profile incomplete (no avatar, for
    /// instance) stays in `SignedInIncompleteProfile`.
    pub async fn complete_profile(&self, form: &ProfileForm) -> AuthResult<AuthState> {
        let claim = self.begin()?;
        let result = self.run_complete_profile(form).await;
        claim.settle(result)
    }

    /// Fetch the session identity's profile as a prefilled form.
    ///
    /// Links default to every known provider with an empty URL.
    pub async fn load_profile(&self) -> AuthResult<ProfileForm> {
        let claim = self.begin()?;

        let result = match self.session_identity() {
            Ok(identity) => match self.remote.get_profile(identity.id).await {
                Ok(Some(profile)) => Ok(profile),
                Ok(None) => Err(AuthError::not_found(identity.id)),
                Err(e) => Err(AuthError::remote(PROFILE_LOAD_FAILED, e)),
            },
            Err(e) => Err(e),
        };

        match result {
            Ok(profile) => {
                let origin = claim.origin().clone();
                claim.release(origin, None);
                Ok(ProfileForm {
                    username: profile.username,
                    bio: profile.bio.unwrap_or_default(),
                    avatar: profile.avatar,
                    links: Some(
                        profile
                            .links
                            .unwrap_or_else(ProfileLinks::with_known_providers),
                    ),
                })
            }
            Err(err) => Err(claim.fail(err)),
        }
    }

    /// Clear the session, then end the remote session.
    ///
    /// The session is gone as soon as this is published; a remote sign-out
    /// failure is only logged.
    pub async fn sign_out(&self) -> AuthResult<AuthState> {
        let mut claim = self.begin()?;

        let mut cleared = None;
        self.snapshot.send_modify(|snapshot| {
            snapshot.state = AuthState::SignedOut;
            cleared = snapshot.session.clear();
        });
        claim.rebase(AuthState::SignedOut);
        if let Some(identity) = cleared {
            info!("Signed out {}", identity.id);
        }

        if let Err(e) = self.remote.sign_out_session().await {
            warn!("Remote sign-out failed: {e}");
        }

        claim.release(AuthState::SignedOut, None);
        Ok(AuthState::SignedOut)
    }

    /// Drop the displayed message, leaving `Error` for its settled state
    pub fn clear_error(&self) {
        self.snapshot.send_if_modified(|snapshot| {
            let resolved = snapshot.state.resolved().clone();
            let modified = snapshot.message.is_some() || snapshot.state != resolved;
            snapshot.state = resolved;
            snapshot.message = None;
            modified
        });
    }

    // =========================================================================
    // Action bodies
    // =========================================================================

    async fn run_sign_up(&self, form: &SignUpForm, origin: AuthState) -> AuthResult<Settled> {
        form.validate()?;

        let password_hash = hash_password_blocking(form.password.clone()).await?;
        let identity = NewIdentity {
            username: form.username.clone(),
            email: form.email.clone(),
            password_hash,
        };

        self.remote
            .insert_identity(&identity)
            .await
            .map_err(|e| AuthError::remote(e.service_message().to_string(), e))?;

        info!("Registered identity {}", form.username);
        Ok(Settled {
            state: origin,
            notice: Some(SIGN_UP_NOTICE),
        })
    }

    async fn run_sign_in(&self, form: &SignInForm) -> AuthResult<Settled> {
        form.validate()?;

        let records = self.remote.find_identities(&form.username).await.map_err(|e| {
            warn!("Credential lookup failed: {e}");
            AuthError::credential()
        })?;

        let [record] = <[_; 1]>::try_from(records).map_err(|records| {
            debug!("{} identities match the username", records.len());
            AuthError::credential()
        })?;

        let verified = verify_password_blocking(form.password.clone(), record.password_hash.clone())
            .await
            .unwrap_or_else(|e| {
                warn!("Stored hash for {} is unusable: {e}", record.id);
                false
            });
        if !verified {
            return Err(AuthError::credential());
        }

        self.publish_state(AuthState::Authenticating);

        let identity = record.into_identity();
        self.remote
            .open_session(&identity)
            .await
            .map_err(|e| AuthError::remote(e.service_message().to_string(), e))?;

        info!("Signed in {}", identity.id);
        Ok(Settled::quiet(self.settle_signed_in(identity).await))
    }

    async fn run_complete_profile(&self, form: &ProfileForm) -> AuthResult<Settled> {
        let identity = self.session_identity()?;
        form.validate()?;

        let update = ProfileUpdate::from_form(form, Utc::now());
        self.remote
            .update_identity(identity.id, &update)
            .await
            .map_err(|e| AuthError::remote(PROFILE_UPDATE_FAILED, e))?;

        let written = Identity {
            username: update.username,
            bio: Some(update.bio),
            avatar: update.avatar,
            links: update.links,
            ..identity
        };

        Ok(Settled {
            state: self.settle_signed_in(written).await,
            notice: Some(PROFILE_SAVED_NOTICE),
        })
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Re-fetch the profile, store it as the session identity, and pick the
    /// signed-in state from its completeness
    async fn settle_signed_in(&self, fallback: Identity) -> AuthState {
        let (profile, complete) = match self.remote.get_profile(fallback.id).await {
            Ok(Some(profile)) => {
                let complete = is_profile_complete(&profile);
                (profile, complete)
            }
            Ok(None) => {
                warn!("{}", AuthError::not_found(fallback.id));
                (fallback, false)
            }
            Err(e) => {
                warn!("Completeness check failed for {}: {e}", fallback.id);
                (fallback, false)
            }
        };

        let state = if complete {
            AuthState::SignedInComplete
        } else {
            AuthState::SignedInIncompleteProfile
        };

        self.snapshot.send_modify(|snapshot| {
            snapshot.session.replace(profile);
        });
        state
    }

    fn session_identity(&self) -> AuthResult<Identity> {
        self.current_identity().ok_or_else(AuthError::not_signed_in)
    }

    /// Claim the loading flag for one action
    fn begin(&self) -> AuthResult<ActionClaim<'_>> {
        ActionClaim::acquire(&self.snapshot).ok_or_else(|| {
            debug!("Rejected action while another is in flight");
            AuthError::busy()
        })
    }

    fn publish_state(&self, state: AuthState) {
        self.snapshot.send_modify(|snapshot| snapshot.state = state);
    }
}
