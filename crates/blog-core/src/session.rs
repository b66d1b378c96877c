//! Session state kept in key-value storage.
//!
//! Two keys: the raw token and the JSON-serialized user record. Both are
//! written on login/registration and removed together on logout or on an
//! unauthorized response.

use std::fmt;
use std::sync::Arc;

use anyhow::{Context, Result};
use blog_types::User;

use crate::storage::Storage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Anonymous => write!(f, "anonymous"),
            SessionState::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Handle to the persisted session. Cheap to clone.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn Storage>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Returns the stored token; blank values count as absent.
    pub fn token(&self) -> Result<Option<String>> {
        let token = self
            .storage
            .get_item(TOKEN_KEY)
            .context("Failed to read session token")?;
        Ok(token.filter(|t| !t.trim().is_empty()))
    }

    /// Returns the stored user record. A record that does not parse is
    /// treated as absent.
    pub fn current_user(&self) -> Result<Option<User>> {
        let Some(raw) = self
            .storage
            .get_item(USER_KEY)
            .context("Failed to read stored user")?
        else {
            return Ok(None);
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable stored user record");
                Ok(None)
            }
        }
    }

    pub fn state(&self) -> Result<SessionState> {
        Ok(if self.token()?.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        })
    }

    /// Persists a new session. Without a user, any stale record is removed.
    pub fn start(&self, token: &str, user: Option<&User>) -> Result<()> {
        self.storage
            .set_item(TOKEN_KEY, token)
            .context("Failed to save session token")?;
        match user {
            Some(user) => self.store_user(user)?,
            None => self
                .storage
                .remove_item(USER_KEY)
                .context("Failed to remove stored user")?,
        }
        tracing::info!("session started");
        Ok(())
    }

    pub fn store_user(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user).context("Failed to serialize user")?;
        self.storage
            .set_item(USER_KEY, &raw)
            .context("Failed to save user record")
    }

    /// Removes token and user record. Returns whether a token was stored.
    pub fn clear(&self) -> Result<bool> {
        let had_token = self.token().unwrap_or(None).is_some();
        let token_result = self
            .storage
            .remove_item(TOKEN_KEY)
            .context("Failed to remove session token");
        let user_result = self
            .storage
            .remove_item(USER_KEY)
            .context("Failed to remove stored user");
        token_result?;
        user_result?;
        tracing::info!(had_token, "session cleared");
        Ok(had_token)
    }
}

/// Masks a token for display; tokens are never shown in full.
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= 16 {
        return "***".to_string();
    }
    let prefix: String = token.chars().take(12).collect();
    format!("{prefix}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn session() -> (Arc<MemoryStorage>, Session) {
        let storage = Arc::new(MemoryStorage::new());
        let session = Session::new(Arc::clone(&storage) as Arc<dyn Storage>);
        (storage, session)
    }

    fn alice() -> User {
        User {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let (_, session) = session();
        assert_eq!(session.state().unwrap(), SessionState::Anonymous);
        assert_eq!(session.token().unwrap(), None);
        assert_eq!(session.current_user().unwrap(), None);
    }

    #[test]
    fn test_start_stores_token_and_user() {
        let (storage, session) = session();
        session.start("tok-123", Some(&alice())).unwrap();

        assert_eq!(session.state().unwrap(), SessionState::Authenticated);
        assert_eq!(session.token().unwrap().as_deref(), Some("tok-123"));
        assert_eq!(session.current_user().unwrap(), Some(alice()));

        let raw = storage.get_item(USER_KEY).unwrap().unwrap();
        assert!(raw.contains("\"username\":\"alice\""));
    }

    #[test]
    fn test_start_without_user_drops_stale_record() {
        let (_, session) = session();
        session.start("old", Some(&alice())).unwrap();
        session.start("new", None).unwrap();
        assert_eq!(session.current_user().unwrap(), None);
        assert_eq!(session.token().unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_clear_reports_previous_state() {
        let (_, session) = session();
        assert!(!session.clear().unwrap());

        session.start("tok", Some(&alice())).unwrap();
        assert!(session.clear().unwrap());
        assert_eq!(session.state().unwrap(), SessionState::Anonymous);
        assert_eq!(session.current_user().unwrap(), None);
    }

    #[test]
    fn test_blank_token_is_anonymous() {
        let (storage, session) = session();
        storage.set_item(TOKEN_KEY, "  ").unwrap();
        assert_eq!(session.state().unwrap(), SessionState::Anonymous);
    }

    #[test]
    fn test_unreadable_user_record_is_ignored() {
        let (storage, session) = session();
        storage.set_item(USER_KEY, "not json").unwrap();
        assert_eq!(session.current_user().unwrap(), None);
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("short"), "***");
        assert_eq!(
            mask_token("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"),
            "eyJhbGciOiJI..."
        );
    }
}
