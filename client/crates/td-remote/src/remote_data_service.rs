use crate::{CredentialRecord, NewIdentity, ProfileUpdate, RemoteResult};

use td_core::{Identity, Notification, Project, Task};

use async_trait::async_trait;
use uuid::Uuid;

/// Operations the client needs from the hosted data service.
///
/// Implementations are shared behind `Arc` and must tolerate concurrent
/// calls; the dashboard issues its three list calls at once.
#[async_trait]
pub trait RemoteDataService: Send + Sync {
    // ========================================================================
    // Identity operations
    // ========================================================================

    /// Create an identity row
    async fn insert_identity(&self, identity: &NewIdentity) -> RemoteResult<()>;

    /// All identities registered under `username`, with their password hashes
    async fn find_identities(&self, username: &str) -> RemoteResult<Vec<CredentialRecord>>;

    /// Write profile columns for identity `id`
    async fn update_identity(&self, id: Uuid, update: &ProfileUpdate) -> RemoteResult<()>;

    /// Profile columns for identity `id`; `None` when no row exists
    async fn get_profile(&self, id: Uuid) -> RemoteResult<Option<Identity>>;

    // ========================================================================
    // Dashboard collections
    // ========================================================================

    /// Projects created by `created_by`
    async fn list_projects(&self, created_by: Uuid) -> RemoteResult<Vec<Project>>;

    /// Tasks created by or assigned to `user_id`
    async fn list_tasks(&self, user_id: Uuid) -> RemoteResult<Vec<Task>>;

    /// Unread notifications addressed to `user_id`
    async fn list_notifications(&self, user_id: Uuid) -> RemoteResult<Vec<Notification>>;

    // ========================================================================
    // Session operations
    // ========================================================================

    /// Remember `identity` as the signed-in user for later requests
    async fn open_session(&self, identity: &Identity) -> RemoteResult<()>;

    /// Identity of the cached session, if any
    async fn get_current_session(&self) -> RemoteResult<Option<Identity>>;

    /// Forget the cached session
    async fn sign_out_session(&self) -> RemoteResult<()>;
}
