//! Blog API client: session storage, the session-aware HTTP client, typed
//! endpoint wrappers and the sign-in flows.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod logging;
pub mod navigation;
pub mod session;
pub mod storage;

pub use client::{ApiClient, EnvelopeExt};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use navigation::{Navigator, NoopNavigator, Route};
pub use session::{Session, SessionState};
pub use storage::{FileStorage, MemoryStorage, Storage};
