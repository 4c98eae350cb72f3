use crate::{AuthSnapshot, Screen, route};

use log::debug;
use tokio::sync::watch;

/// Follows published auth snapshots and reports screen changes.
pub struct Navigator {
    receiver: watch::Receiver<AuthSnapshot>,
    current: Screen,
}

impl Navigator {
    pub fn new(mut receiver: watch::Receiver<AuthSnapshot>) -> Self {
        let current = route(&receiver.borrow_and_update().state);
        Self { receiver, current }
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Wait for the next published change that lands on a different screen.
    ///
    /// Returns `None` once the auth machine is gone.
    pub async fn follow(&mut self) -> Option<Screen> {
        loop {
            self.receiver.changed().await.ok()?;

            let screen = route(&self.receiver.borrow_and_update().state);
            if screen != self.current {
                debug!("Navigating {} -> {}", self.current, screen);
                self.current = screen;
                return Some(screen);
            }
        }
    }
}
