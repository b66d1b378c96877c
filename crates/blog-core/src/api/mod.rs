//! Typed wrappers over the blog REST endpoints.
//!
//! Each function performs one request through [`ApiClient`](crate::ApiClient)
//! and unwraps the envelope into the endpoint's payload.

pub mod articles;
pub mod auth;
pub mod comments;
pub mod users;
