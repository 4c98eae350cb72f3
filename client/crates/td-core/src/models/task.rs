//! Task entity - read-only display record created by or assigned to an identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    pub created_by: Uuid,
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
}

impl Task {
    /// Whether `user_id` created or is assigned to this task
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.created_by == user_id || self.assigned_to == Some(user_id)
    }
}
