//! Profile command handlers.

use anyhow::{Context, Result};
use blog_core::auth;

use super::require_login;
use crate::cli::App;
use crate::cli::display;

pub async fn show(app: &App) -> Result<()> {
    require_login(app)?;
    let user = auth::refresh_profile(&app.client)
        .await
        .context("Failed to load profile")?;
    display::print_user(&user);
    Ok(())
}

pub async fn update(app: &App, username: Option<&str>, avatar: Option<&str>) -> Result<()> {
    require_login(app)?;
    let user = auth::update_profile(&app.client, username, avatar)
        .await
        .context("Failed to update profile")?;
    println!("Profile updated");
    display::print_user(&user);
    Ok(())
}
