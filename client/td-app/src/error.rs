use td_auth::AuthError;
use td_config::ConfigError;
use td_dashboard::DashboardError;
use td_remote::RemoteError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Remote client error: {0}")]
    Remote(#[from] RemoteError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Dashboard(#[from] DashboardError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("I/O error on {path}: {source} {location}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Line printed to the terminal for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(err) => err.user_message().to_string(),
            Self::Dashboard(DashboardError::NotSignedIn { .. }) => {
                String::from("Sign in to see the dashboard.")
            }
            Self::Dashboard(DashboardError::ProfileIncomplete { .. }) => {
                String::from("Complete your profile to see the dashboard.")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
