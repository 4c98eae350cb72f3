use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Dashboard requires a signed-in session {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Dashboard requires a complete profile {location}")]
    ProfileIncomplete { location: ErrorLocation },
}

impl DashboardError {
    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_incomplete() -> Self {
        Self::ProfileIncomplete {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
