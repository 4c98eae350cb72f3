use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur talking to the hosted data service
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid client configuration: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session file error at {path}: {source} {location}")]
    SessionFile {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl RemoteError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        RemoteError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        RemoteError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        RemoteError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a client configuration error with location
    #[track_caller]
    pub fn config(message: impl Into<String>) -> Self {
        RemoteError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a session file error with location
    #[track_caller]
    pub fn session_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RemoteError::SessionFile {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// Message reported by the service, or a transport summary.
    pub fn service_message(&self) -> &str {
        match self {
            Self::Api { message, .. } => message,
            Self::Http { message, .. }
            | Self::Json { message, .. }
            | Self::Config { message, .. } => message,
            Self::SessionFile { .. } => "Could not store the session",
        }
    }

    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            Self::Json { .. } | Self::Config { .. } | Self::SessionFile { .. } => false,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RemoteError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for RemoteError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        RemoteError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, RemoteError>;
