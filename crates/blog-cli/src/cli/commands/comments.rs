//! Comment command handlers.

use anyhow::{Context, Result};
use blog_core::api::comments;
use blog_core::forms;
use blog_types::ListParams;

use super::require_login;
use crate::cli::App;
use crate::cli::display;

pub async fn list(app: &App, article_id: u64, params: ListParams) -> Result<()> {
    let page = comments::list(&app.client, article_id, params)
        .await
        .context("Failed to load comments")?;
    display::print_comments(&page.comments);
    if page.pagination.total_pages > 1 {
        display::print_pagination(&page.pagination);
    }
    Ok(())
}

pub async fn add(app: &App, article_id: u64, content: &str) -> Result<()> {
    let comment = forms::new_comment(content)?;
    require_login(app)?;
    let created = comments::create(&app.client, article_id, &comment)
        .await
        .context("Failed to post comment")?;
    println!("Comment #{} posted on article #{article_id}", created.id);
    Ok(())
}

pub async fn delete(app: &App, id: u64) -> Result<()> {
    require_login(app)?;
    let message = comments::delete(&app.client, id)
        .await
        .context("Failed to delete comment")?;
    println!(
        "{}",
        message.unwrap_or_else(|| format!("Deleted comment #{id}"))
    );
    Ok(())
}
