//! Navigation requests raised by the client and the auth flows.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Article(u64),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Login => write!(f, "/login"),
            Route::Article(id) => write!(f, "/article/{id}"),
        }
    }
}

/// Receives navigation requests from the client (e.g. "go to login" after
/// the session was rejected).
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigation ignored");
    }
}
