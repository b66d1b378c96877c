//! Plain-text rendering of server entities.

use blog_types::{Article, Comment, Pagination, User};
use chrono::{DateTime, Local};

const EXCERPT_CHARS: usize = 120;

/// RFC 3339 timestamps are shown in local time; anything else verbatim.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// First characters of the content on a single line.
pub fn excerpt(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= EXCERPT_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}

pub fn user_label(user: &User) -> String {
    if user.email.is_empty() {
        format!("{} (#{})", user.username, user.id)
    } else {
        format!("{} <{}> (#{})", user.username, user.email, user.id)
    }
}

pub fn print_user(user: &User) {
    println!("Username: {}", user.username);
    println!("Email:    {}", user.email);
    println!("ID:       {}", user.id);
    if !user.avatar.is_empty() {
        println!("Avatar:   {}", user.avatar);
    }
    if user.created_at.is_some() {
        println!("Joined:   {}", format_timestamp(user.created_at.as_deref()));
    }
}

pub fn print_pagination(pagination: &Pagination) {
    println!(
        "Page {}/{} ({} total)",
        pagination.page,
        pagination.total_pages.max(1),
        pagination.total
    );
}

pub fn print_article_summary(article: &Article) {
    println!("#{}  {}", article.id, article.title);
    println!(
        "    {} · {} · {} views · {} comments",
        article.author_name(),
        format_timestamp(article.created_at.as_deref()),
        article.views,
        article.comments_count
    );
    let preview = excerpt(&article.content);
    if !preview.is_empty() {
        println!("    {preview}");
    }
}

/// Full article view; the comment count is the length of the fetched list.
pub fn print_article(article: &Article, comments: &[Comment]) {
    println!("{}", article.title);
    println!(
        "{} · {} · {} views · {} comments",
        article.author_name(),
        format_timestamp(article.created_at.as_deref()),
        article.views,
        comments.len()
    );
    println!();
    println!("{}", article.content.trim_end());
    println!();
    print_comments(comments);
}

pub fn print_comments(comments: &[Comment]) {
    if comments.is_empty() {
        println!("No comments yet.");
        return;
    }
    println!("Comments ({}):", comments.len());
    for comment in comments {
        println!(
            "  [#{}] {} · {}",
            comment.id,
            comment.author_name(),
            format_timestamp(comment.created_at.as_deref())
        );
        for line in comment.content.lines() {
            println!("    {line}");
        }
    }
}
