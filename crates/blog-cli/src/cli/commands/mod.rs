//! CLI command handlers.

pub mod articles;
pub mod auth;
pub mod comments;
pub mod config;
pub mod profile;
pub mod status;

use anyhow::{Result, bail};

use super::App;

/// Refuses to send a write request without a stored session.
fn require_login(app: &App) -> Result<()> {
    if app.session().token()?.is_none() {
        bail!("Not logged in. Run `blog login` first.");
    }
    Ok(())
}
