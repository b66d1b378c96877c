//! Server-owned entities. The client only displays and creates them.

use serde::{Deserialize, Serialize};

/// A registered user as returned by `/users/me` and the auth endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// Returns true for the zero-valued user some replies carry in place of "no user".
    pub fn is_placeholder(&self) -> bool {
        self.id == 0 && self.username.is_empty()
    }
}

/// Article or comment author: either a nested user object or a bare name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    User(User),
    Name(String),
}

impl Author {
    pub fn display_name(&self) -> Option<&str> {
        let name = match self {
            Author::User(user) => user.username.as_str(),
            Author::Name(name) => name.as_str(),
        };
        let name = name.trim();
        if name.is_empty() { None } else { Some(name) }
    }
}

fn author_label(author: Option<&Author>, author_id: Option<u64>) -> String {
    if let Some(name) = author.and_then(Author::display_name) {
        return name.to_string();
    }
    match author_id {
        Some(id) if id != 0 => format!("user #{id}"),
        _ => "anonymous".to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub id: u64,
    pub title: String,
    /// Markdown source, shown as-is.
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub views: u64,
    pub comments_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Article {
    pub fn author_name(&self) -> String {
        author_label(self.author.as_ref(), self.author_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: u64,
    pub content: String,
    pub article_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Comment {
    pub fn author_name(&self) -> String {
        author_label(self.author.as_ref(), self.author_id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// Payload of `GET /articles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    pub pagination: Pagination,
}

/// Payload of `GET /articles/{id}/comments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    pub pagination: Pagination,
}
