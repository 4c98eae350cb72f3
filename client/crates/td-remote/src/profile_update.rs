use td_core::{Avatar, ProfileForm, ProfileLinks};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Columns written by a profile submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub bio: String,
    pub avatar: Option<Avatar>,
    pub links: Option<ProfileLinks>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileUpdate {
    pub fn from_form(form: &ProfileForm, updated_at: DateTime<Utc>) -> Self {
        Self {
            username: form.username.trim().to_string(),
            bio: form.bio.trim().to_string(),
            avatar: form.avatar.clone(),
            links: form.links.clone(),
            updated_at,
        }
    }
}
