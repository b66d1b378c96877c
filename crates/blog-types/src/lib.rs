//! Wire types shared by the blog client and its front ends.

mod envelope;
mod models;
mod payloads;

pub use envelope::Envelope;
pub use models::{Article, ArticlePage, Author, Comment, CommentPage, Pagination, User};
pub use payloads::{
    ArticleUpdate, AuthPayload, Credentials, ListParams, NewArticle, NewComment, ProfileUpdate,
    Registration,
};
