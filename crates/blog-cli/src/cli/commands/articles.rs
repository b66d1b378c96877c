//! Article command handlers.

use anyhow::{Context, Result};
use blog_core::api::{articles, comments};
use blog_core::{Route, forms};
use blog_types::ListParams;

use super::require_login;
use crate::cli::App;
use crate::cli::display;

/// First page of articles.
pub async fn home(app: &App) -> Result<()> {
    list(app, ListParams::new(1, app.config.page_size())).await
}

pub async fn list(app: &App, params: ListParams) -> Result<()> {
    let page = articles::list(&app.client, params)
        .await
        .context("Failed to load articles")?;

    if page.articles.is_empty() {
        println!("No articles yet.");
        return Ok(());
    }
    for article in &page.articles {
        display::print_article_summary(article);
    }
    println!();
    display::print_pagination(&page.pagination);
    Ok(())
}

/// Article and its comments, fetched concurrently.
pub async fn show(app: &App, id: u64) -> Result<()> {
    let params = ListParams::new(1, app.config.page_size());
    let (article, comment_page) = tokio::join!(
        articles::get(&app.client, id),
        comments::list(&app.client, id, params),
    );
    let article = article.context("Failed to load article")?;
    let comment_page = comment_page.context("Failed to load comments")?;

    display::print_article(&article, &comment_page.comments);
    Ok(())
}

pub async fn create(app: &App, title: &str, content: &str) -> Result<()> {
    let article = forms::new_article(title, content)?;
    require_login(app)?;
    let created = articles::create(&app.client, &article)
        .await
        .context("Failed to publish article")?;
    println!("Published article #{}: {}", created.id, created.title);
    app.client.navigate(Route::Article(created.id));
    Ok(())
}

pub async fn edit(app: &App, id: u64, title: Option<&str>, content: Option<&str>) -> Result<()> {
    let update = forms::article_update(title, content)?;
    require_login(app)?;
    let updated = articles::update(&app.client, id, &update)
        .await
        .context("Failed to update article")?;
    println!("Updated article #{}: {}", updated.id, updated.title);
    Ok(())
}

pub async fn delete(app: &App, id: u64) -> Result<()> {
    require_login(app)?;
    let message = articles::delete(&app.client, id)
        .await
        .context("Failed to delete article")?;
    println!(
        "{}",
        message.unwrap_or_else(|| format!("Deleted article #{id}"))
    );
    Ok(())
}
