use std::fmt;

/// The first rule a form violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationFailure {
    /// Rule identifier, stable across releases
    pub rule: &'static str,
    /// Message shown to the user
    pub message: &'static str,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
