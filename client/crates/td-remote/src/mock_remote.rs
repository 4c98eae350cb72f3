//! In-memory implementation of `RemoteDataService` for tests.
//!
//! Tables live in `tokio::sync::RwLock` collections. Every call is counted
//! per `Operation`, and individual operations can be made to fail or to
//! stall for a while so callers can exercise error and late-result paths.

use crate::{
    CredentialRecord, NewIdentity, ProfileUpdate, RemoteDataService, RemoteError, RemoteResult,
};

use td_core::{Identity, Notification, Project, Task};

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Remote operations, for call counting and failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    InsertIdentity,
    FindIdentities,
    UpdateIdentity,
    GetProfile,
    ListProjects,
    ListTasks,
    ListNotifications,
    OpenSession,
    GetCurrentSession,
    SignOutSession,
}

#[derive(Debug, Clone)]
struct StoredUser {
    identity: Identity,
    password_hash: String,
}

/// In-memory mock of the hosted data service.
#[derive(Default)]
pub struct MockRemote {
    users: RwLock<Vec<StoredUser>>,
    pub projects: RwLock<Vec<Project>>,
    pub tasks: RwLock<Vec<Task>>,
    pub notifications: RwLock<Vec<Notification>>,
    session: RwLock<Option<Uuid>>,
    calls: RwLock<HashMap<Operation, usize>>,
    failing: RwLock<HashSet<Operation>>,
    delays: RwLock<HashMap<Operation, Duration>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an identity row with an already-hashed password
    pub async fn seed_identity(&self, identity: Identity, password_hash: impl Into<String>) {
        self.users.write().await.push(StoredUser {
            identity,
            password_hash: password_hash.into(),
        });
    }

    /// Stored identity by id, as the service would return it
    pub async fn identity(&self, id: Uuid) -> Option<Identity> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.identity.id == id)
            .map(|user| user.identity.clone())
    }

    /// Stored identities by username
    pub async fn identities_named(&self, username: &str) -> Vec<Identity> {
        self.users
            .read()
            .await
            .iter()
            .filter(|user| user.identity.username == username)
            .map(|user| user.identity.clone())
            .collect()
    }

    /// Stored password hash for `username` (first match)
    pub async fn password_hash_of(&self, username: &str) -> Option<String> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.identity.username == username)
            .map(|user| user.password_hash.clone())
    }

    /// Make every later call to `operation` fail with a 503
    pub async fn fail(&self, operation: Operation) {
        self.failing.write().await.insert(operation);
    }

    /// Let `operation` succeed again
    pub async fn recover(&self, operation: Operation) {
        self.failing.write().await.remove(&operation);
    }

    /// Stall every later call to `operation` for `delay`
    pub async fn delay(&self, operation: Operation, delay: Duration) {
        self.delays.write().await.insert(operation, delay);
    }

    /// Number of calls made to `operation`
    pub async fn calls(&self, operation: Operation) -> usize {
        self.calls
            .read()
            .await
            .get(&operation)
            .copied()
            .unwrap_or(0)
    }

    /// Number of calls made to any operation
    pub async fn total_calls(&self) -> usize {
        self.calls.read().await.values().sum()
    }

    /// Identity id of the cached session
    pub async fn session_identity_id(&self) -> Option<Uuid> {
        *self.session.read().await
    }

    async fn enter(&self, operation: Operation) -> RemoteResult<()> {
        *self.calls.write().await.entry(operation).or_insert(0) += 1;

        let delay = self.delays.read().await.get(&operation).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.read().await.contains(&operation) {
            return Err(RemoteError::api_error(
                503,
                "PGRST503",
                format!("{operation:?} unavailable"),
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl RemoteDataService for MockRemote {
    async fn insert_identity(&self, identity: &NewIdentity) -> RemoteResult<()> {
        self.enter(Operation::InsertIdentity).await?;

        let mut users = self.users.write().await;
        if users
            .iter()
            .any(|user| user.identity.username == identity.username)
        {
            return Err(RemoteError::api_error(
                409,
                "23505",
                "duplicate key value violates unique constraint \"users_username_key\"",
            ));
        }

        users.push(StoredUser {
            identity: Identity::new(
                Uuid::new_v4(),
                identity.username.clone(),
                Some(identity.email.clone()),
            ),
            password_hash: identity.password_hash.clone(),
        });
        Ok(())
    }

    async fn find_identities(&self, username: &str) -> RemoteResult<Vec<CredentialRecord>> {
        self.enter(Operation::FindIdentities).await?;

        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|user| user.identity.username == username)
            .map(|user| CredentialRecord {
                id: user.identity.id,
                username: user.identity.username.clone(),
                email: user.identity.email.clone(),
                password_hash: user.password_hash.clone(),
            })
            .collect())
    }

    async fn update_identity(&self, id: Uuid, update: &ProfileUpdate) -> RemoteResult<()> {
        self.enter(Operation::UpdateIdentity).await?;

        let mut users = self.users.write().await;
        if let Some(user) = users.iter_mut().find(|user| user.identity.id == id) {
            user.identity.username = update.username.clone();
            user.identity.bio = Some(update.bio.clone());
            user.identity.avatar = update.avatar.clone();
            user.identity.links = update.links.clone();
        }
        Ok(())
    }

    async fn get_profile(&self, id: Uuid) -> RemoteResult<Option<Identity>> {
        self.enter(Operation::GetProfile).await?;
        Ok(self.identity(id).await)
    }

    async fn list_projects(&self, created_by: Uuid) -> RemoteResult<Vec<Project>> {
        self.enter(Operation::ListProjects).await?;

        Ok(self
            .projects
            .read()
            .await
            .iter()
            .filter(|project| project.created_by == created_by)
            .cloned()
            .collect())
    }

    async fn list_tasks(&self, user_id: Uuid) -> RemoteResult<Vec<Task>> {
        self.enter(Operation::ListTasks).await?;

        Ok(self
            .tasks
            .read()
            .await
            .iter()
            .filter(|task| task.involves(user_id))
            .cloned()
            .collect())
    }

    async fn list_notifications(&self, user_id: Uuid) -> RemoteResult<Vec<Notification>> {
        self.enter(Operation::ListNotifications).await?;

        Ok(self
            .notifications
            .read()
            .await
            .iter()
            .filter(|notification| notification.user_id == user_id && !notification.is_read)
            .cloned()
            .collect())
    }

    async fn open_session(&self, identity: &Identity) -> RemoteResult<()> {
        self.enter(Operation::OpenSession).await?;
        *self.session.write().await = Some(identity.id);
        Ok(())
    }

    async fn get_current_session(&self) -> RemoteResult<Option<Identity>> {
        self.enter(Operation::GetCurrentSession).await?;

        let id = *self.session.read().await;
        match id {
            Some(id) => Ok(self.identity(id).await),
            None => Ok(None),
        }
    }

    async fn sign_out_session(&self) -> RemoteResult<()> {
        self.enter(Operation::SignOutSession).await?;
        *self.session.write().await = None;
        Ok(())
    }
}
