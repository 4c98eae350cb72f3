use td_core::{CoreError, ValidationFailure};
use td_remote::RemoteError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

const CREDENTIAL_MESSAGE: &str = "Invalid username or password.";
const NOT_FOUND_MESSAGE: &str = "Profile not found.";
const BUSY_MESSAGE: &str = "Please wait for the current request to finish.";
const NOT_SIGNED_IN_MESSAGE: &str = "You must be signed in to do that.";
const HASHING_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Validation failed: {failure} {location}")]
    Validation {
        failure: ValidationFailure,
        location: ErrorLocation,
    },

    #[error("Invalid credentials {location}")]
    Credential { location: ErrorLocation },

    #[error("Remote failure: {message}: {source} {location}")]
    Remote {
        message: String,
        #[source]
        source: RemoteError,
        location: ErrorLocation,
    },

    #[error("No profile record for identity {identity_id} {location}")]
    NotFound {
        identity_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Another auth action is in flight {location}")]
    Busy { location: ErrorLocation },

    #[error("No signed-in identity {location}")]
    NotSignedIn { location: ErrorLocation },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn validation(failure: ValidationFailure) -> Self {
        Self::Validation {
            failure,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn credential() -> Self {
        Self::Credential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Remote failure shown to the user as `message`
    #[track_caller]
    pub fn remote(message: impl Into<String>, source: RemoteError) -> Self {
        Self::Remote {
            message: message.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(identity_id: Uuid) -> Self {
        Self::NotFound {
            identity_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn busy() -> Self {
        Self::Busy {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_signed_in() -> Self {
        Self::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message safe to show the user, without location noise
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation { failure, .. } => failure.message,
            Self::Credential { .. } => CREDENTIAL_MESSAGE,
            Self::Remote { message, .. } => message,
            Self::NotFound { .. } => NOT_FOUND_MESSAGE,
            Self::Busy { .. } => BUSY_MESSAGE,
            Self::NotSignedIn { .. } => NOT_SIGNED_IN_MESSAGE,
            Self::Hashing { .. } => HASHING_MESSAGE,
        }
    }

    /// Whether the machine records this failure as an `Error` state
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { failure, .. } => AuthError::validation(failure),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
