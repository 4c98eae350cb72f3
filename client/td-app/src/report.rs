use td_auth::{AuthSnapshot, AuthState, Screen, route};

use std::fmt;

/// What a command leaves on the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub screen: Screen,
    pub state: AuthState,
    pub message: Option<String>,
    /// Screen content, e.g. the rendered dashboard
    pub body: Option<String>,
}

impl Report {
    pub fn from_snapshot(snapshot: &AuthSnapshot) -> Self {
        Self {
            screen: route(&snapshot.state),
            state: snapshot.state.clone(),
            message: snapshot.message.clone(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "== {} ==", self.screen)?;
        let tabs = self.screen.tabs();
        if !tabs.is_empty() {
            let names: Vec<&str> = tabs.iter().map(|tab| tab.title()).collect();
            write!(f, "  [{}]", names.join(" | "))?;
        }
        writeln!(f)?;

        if let Some(ref message) = self.message {
            writeln!(f, "{message}")?;
        }
        if let Some(ref body) = self.body {
            writeln!(f)?;
            write!(f, "{body}")?;
        }
        Ok(())
    }
}
