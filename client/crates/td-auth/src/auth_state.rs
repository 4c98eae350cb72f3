use std::fmt;

/// Where the user stands in the authentication flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    SignedOut,
    Authenticating,
    SignedInIncompleteProfile,
    SignedInComplete,
    /// An unexpected remote failure. Not terminal: the next action is
    /// evaluated from `previous`.
    Error {
        message: String,
        previous: Box<AuthState>,
    },
}

impl AuthState {
    /// Error state recorded on top of `previous`.
    ///
    /// Errors never nest; an error raised while already in `Error` keeps the
    /// first settled state underneath.
    pub fn error(message: impl Into<String>, previous: AuthState) -> Self {
        Self::Error {
            message: message.into(),
            previous: Box::new(previous.resolved().clone()),
        }
    }

    /// The settled state, looking through `Error`
    pub fn resolved(&self) -> &AuthState {
        match self {
            Self::Error { previous, .. } => previous.resolved(),
            state => state,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedOut => write!(f, "signed out"),
            Self::Authenticating => write!(f, "authenticating"),
            Self::SignedInIncompleteProfile => write!(f, "signed in (profile incomplete)"),
            Self::SignedInComplete => write!(f, "signed in"),
            Self::Error { message, previous } => write!(f, "error: {message} (was {previous})"),
        }
    }
}
