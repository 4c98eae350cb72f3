use crate::AuthState;

use std::fmt;

/// Top-level screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Sign-in and sign-up forms
    Credentials,
    Profile,
    Dashboard,
}

const SIGNED_IN_TABS: [Screen; 2] = [Screen::Dashboard, Screen::Profile];

impl Screen {
    /// Tabs offered alongside this screen
    pub fn tabs(self) -> &'static [Screen] {
        match self {
            Screen::Credentials => &[],
            Screen::Profile | Screen::Dashboard => &SIGNED_IN_TABS,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Credentials => "Sign In",
            Screen::Profile => "Complete Your Profile",
            Screen::Dashboard => "Dashboard",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Screen to present for `state`
pub fn route(state: &AuthState) -> Screen {
    match state {
        AuthState::SignedOut | AuthState::Authenticating => Screen::Credentials,
        AuthState::SignedInIncompleteProfile => Screen::Profile,
        AuthState::SignedInComplete => Screen::Dashboard,
        AuthState::Error { previous, .. } => route(previous),
    }
}
