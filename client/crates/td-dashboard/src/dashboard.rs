//! Dashboard aggregation.
//!
//! The three fetches run concurrently and settle independently. The session
//! identity is read from the auth watch channel before and after; when it
//! changed in between (sign-out, another user) the result is dropped.

use crate::{DashboardData, DashboardError, Result as DashboardResult, Section};

use td_auth::{AuthSnapshot, AuthState};
use td_remote::RemoteDataService;

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::watch;

pub struct Dashboard {
    remote: Arc<dyn RemoteDataService>,
    session: watch::Receiver<AuthSnapshot>,
}

impl Dashboard {
    pub fn new(remote: Arc<dyn RemoteDataService>, session: watch::Receiver<AuthSnapshot>) -> Self {
        Self { remote, session }
    }

    /// Load all sections for the current session identity.
    ///
    /// Returns `Ok(None)` when the session changed before the fetches
    /// settled.
    pub async fn load(&self) -> DashboardResult<Option<DashboardData>> {
        let identity = {
            let snapshot = self.session.borrow();
            let identity = snapshot
                .identity()
                .cloned()
                .ok_or_else(DashboardError::not_signed_in)?;
            if snapshot.state.resolved() != &AuthState::SignedInComplete {
                return Err(DashboardError::profile_incomplete());
            }
            identity
        };
        let user_id = identity.id;

        debug!("Loading dashboard for {user_id}");
        let (projects, tasks, notifications) = tokio::join!(
            self.remote.list_projects(user_id),
            self.remote.list_tasks(user_id),
            self.remote.list_notifications(user_id),
        );

        if self.session.borrow().identity_id() != Some(user_id) {
            info!("Session changed while loading dashboard for {user_id}, discarding");
            return Ok(None);
        }

        Ok(Some(DashboardData {
            identity,
            projects: Section::from_result("projects", projects),
            tasks: Section::from_result("tasks", tasks),
            notifications: Section::from_result("notifications", notifications),
        }))
    }
}
