//! Terminal handling of navigation requests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use blog_core::{Navigator, Route};

pub const LOGIN_HINT: &str = "Session expired or invalid. Run `blog login` to sign in again.";

/// `Route::Login` prints a hint unless the running command is the login entry
/// point itself. Other routes are queued and followed once the command is done.
#[derive(Debug, Default)]
pub struct CliNavigator {
    at_login_entry: bool,
    hinted: AtomicBool,
    pending: Mutex<Option<Route>>,
}

impl CliNavigator {
    pub fn new(at_login_entry: bool) -> Self {
        Self {
            at_login_entry,
            ..Self::default()
        }
    }

    /// Takes the last queued route, if any.
    pub fn take_pending(&self) -> Option<Route> {
        self.pending.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigate");
        match route {
            Route::Login => {
                if self.at_login_entry {
                    return;
                }
                // Concurrent requests may each hit 401; hint once.
                if !self.hinted.swap(true, Ordering::SeqCst) {
                    eprintln!("{LOGIN_HINT}");
                }
            }
            other => {
                if let Ok(mut slot) = self.pending.lock() {
                    *slot = Some(other);
                }
            }
        }
    }
}
