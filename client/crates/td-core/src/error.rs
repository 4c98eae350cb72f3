use crate::ValidationFailure;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {failure} {location}")]
    Validation {
        failure: ValidationFailure,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error at the caller location
    #[track_caller]
    pub fn validation(failure: ValidationFailure) -> Self {
        CoreError::Validation {
            failure,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The user-displayable message, without location noise
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation { failure, .. } => failure.message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
