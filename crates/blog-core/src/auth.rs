//! Sign-in, registration and profile flows.
//!
//! Each flow validates its input, calls the API and keeps the persisted
//! session in step with the result. Nothing is persisted on failure.

use anyhow::Context;
use blog_types::User;

use crate::api;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::forms;
use crate::navigation::Route;
use crate::session::Session;

/// Outcome of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    /// `None` when the server did not return a user record.
    pub user: Option<User>,
    pub destination: Route,
}

pub async fn login(client: &ApiClient, email: &str, password: &str) -> ApiResult<SignedIn> {
    let credentials = forms::login(email, password)?;
    let payload = api::auth::login(client, &credentials).await?;
    client
        .session()
        .start(&payload.token, payload.user())
        .context("Failed to save session")?;

    tracing::info!(user_id = payload.user().map(|u| u.id), "logged in");
    Ok(signed_in(client, payload.user().cloned()))
}

pub async fn register(
    client: &ApiClient,
    username: &str,
    email: &str,
    password: &str,
) -> ApiResult<SignedIn> {
    let registration = forms::registration(username, email, password)?;
    let payload = api::auth::register(client, &registration).await?;
    client
        .session()
        .start(&payload.token, payload.user())
        .context("Failed to save session")?;

    tracing::info!("registered");
    Ok(signed_in(client, payload.user().cloned()))
}

fn signed_in(client: &ApiClient, user: Option<User>) -> SignedIn {
    let destination = Route::Home;
    client.navigate(destination);
    SignedIn { user, destination }
}

/// Clears the session. Returns whether one existed.
pub fn logout(session: &Session) -> anyhow::Result<bool> {
    session.clear()
}

/// Fetches the current user and refreshes the stored record.
pub async fn refresh_profile(client: &ApiClient) -> ApiResult<User> {
    let user = api::users::me(client).await?;
    client
        .session()
        .store_user(&user)
        .context("Failed to save user record")?;
    Ok(user)
}

pub async fn update_profile(
    client: &ApiClient,
    username: Option<&str>,
    avatar: Option<&str>,
) -> ApiResult<User> {
    let update = forms::profile_update(username, avatar)?;
    let user = api::users::update_me(client, &update).await?;
    client
        .session()
        .store_user(&user)
        .context("Failed to save user record")?;
    Ok(user)
}
