//! Login, registration and logout handlers.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use blog_core::auth;

use crate::cli::App;
use crate::cli::display;

pub async fn login(app: &App, email: &str, password: Option<String>) -> Result<()> {
    let password = resolve_password(password)?;
    let signed_in = auth::login(&app.client, email, &password)
        .await
        .context("Login failed")?;
    match &signed_in.user {
        Some(user) => println!("Logged in as {}", display::user_label(user)),
        None => println!("Logged in"),
    }
    Ok(())
}

pub async fn register(
    app: &App,
    username: &str,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = resolve_password(password)?;
    let signed_in = auth::register(&app.client, username, email, &password)
        .await
        .context("Registration failed")?;
    match &signed_in.user {
        Some(user) => println!("Registered and logged in as {}", display::user_label(user)),
        None => println!("Registered and logged in as {username}"),
    }
    Ok(())
}

pub fn logout(app: &App) -> Result<()> {
    if auth::logout(app.session()).context("Failed to clear session")? {
        println!("Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

/// Uses the flag/env value, else one line from stdin.
fn resolve_password(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        io::stderr().flush().ok();
    }
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
