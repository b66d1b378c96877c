//! Session status, read from local storage only.

use std::sync::Arc;

use anyhow::Result;
use blog_core::session::mask_token;
use blog_core::{Config, FileStorage, Session, SessionState, Storage};

use crate::cli::display;

pub fn run(config: &Config) -> Result<()> {
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::open_default());
    let session = Session::new(storage);

    match config.effective_base_url() {
        Ok(url) => println!("API:   {url}"),
        Err(e) => println!("API:   invalid ({e:#})"),
    }

    let state = session.state()?;
    println!("State: {state}");
    if state == SessionState::Anonymous {
        return Ok(());
    }

    if let Some(token) = session.token()? {
        println!("Token: {}", mask_token(&token));
    }
    match session.current_user()? {
        Some(user) => println!("User:  {}", display::user_label(&user)),
        None => println!("User:  (not stored)"),
    }
    Ok(())
}
