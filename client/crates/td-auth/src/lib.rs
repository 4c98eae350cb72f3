//! td-auth
//!
//! Session ownership for the client: the auth state machine that drives
//! sign-up, sign-in, profile completion and sign-out against a
//! `RemoteDataService`, and the router that maps its published state to the
//! screen the user should see.

pub(crate) mod action_claim;
pub mod auth_machine;
pub mod auth_snapshot;
pub mod auth_state;
pub mod error;
pub mod navigator;
pub mod password;
pub mod screen;
pub mod session_store;

pub use auth_machine::AuthMachine;
pub use auth_snapshot::AuthSnapshot;
pub use auth_state::AuthState;
pub use error::{AuthError, Result};
pub use navigator::Navigator;
pub use password::{hash_password, verify_password};
pub use screen::{Screen, route};
pub use session_store::SessionStore;

/// Advisory shown after a successful registration.
pub const SIGN_UP_NOTICE: &str = "Account created successfully. Please sign in.";

/// Advisory shown after a profile submission was written.
pub const PROFILE_SAVED_NOTICE: &str = "Profile updated.";

#[cfg(test)]
mod tests;
