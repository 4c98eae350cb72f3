//! Project entity - read-only display record owned by an identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by: Uuid,
}

impl Project {
    /// Description for display, with the empty-state fallback
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.is_empty() => description,
            _ => "No description provided",
        }
    }
}
