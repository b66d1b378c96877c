//! Client-side form validation.
//!
//! Runs before any request is sent; failures are [`ApiError::Validation`] and
//! never touch the session.

use std::sync::LazyLock;

use blog_types::{ArticleUpdate, Credentials, NewArticle, NewComment, ProfileUpdate, Registration};
use regex::Regex;

use crate::error::{ApiError, ApiResult};

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_string())
}

fn required(value: &str, message: &str) -> ApiResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid(message));
    }
    Ok(value.to_string())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Email and password are required. Passwords are sent as typed.
pub fn login(email: &str, password: &str) -> ApiResult<Credentials> {
    let email = required(email, "Please enter your email")?;
    if password.is_empty() {
        return Err(invalid("Please enter your password"));
    }
    Ok(Credentials {
        email,
        password: password.to_string(),
    })
}

pub fn registration(username: &str, email: &str, password: &str) -> ApiResult<Registration> {
    let username = required(username, "Please enter a username")?;
    let email = required(email, "Please enter your email")?;
    if !is_valid_email(&email) {
        return Err(invalid("Please enter a valid email address"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(Registration {
        username,
        email,
        password: password.to_string(),
    })
}

pub fn new_article(title: &str, content: &str) -> ApiResult<NewArticle> {
    Ok(NewArticle {
        title: required(title, "Please enter a title")?,
        content: required(content, "Please enter the article content")?,
    })
}

/// At least one field must be given; given fields must not be blank.
pub fn article_update(title: Option<&str>, content: Option<&str>) -> ApiResult<ArticleUpdate> {
    if title.is_none() && content.is_none() {
        return Err(invalid("Nothing to update: pass a new title or content"));
    }
    Ok(ArticleUpdate {
        title: title
            .map(|t| required(t, "Please enter a title"))
            .transpose()?,
        content: content
            .map(|c| required(c, "Please enter the article content"))
            .transpose()?,
    })
}

pub fn new_comment(content: &str) -> ApiResult<NewComment> {
    Ok(NewComment {
        content: required(content, "Please enter a comment")?,
    })
}

pub fn profile_update(username: Option<&str>, avatar: Option<&str>) -> ApiResult<ProfileUpdate> {
    if username.is_none() && avatar.is_none() {
        return Err(invalid("Nothing to update: pass a new username or avatar"));
    }
    Ok(ProfileUpdate {
        username: username
            .map(|u| required(u, "Please enter a username"))
            .transpose()?,
        // An empty avatar clears it.
        avatar: avatar.map(|a| a.trim().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ApiError) -> String {
        match err {
            ApiError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert_eq!(
            message(login("  ", "secret").unwrap_err()),
            "Please enter your email"
        );
        assert_eq!(
            message(login("a@b.co", "").unwrap_err()),
            "Please enter your password"
        );

        let creds = login(" a@b.co ", " pass ").unwrap();
        assert_eq!(creds.email, "a@b.co");
        assert_eq!(creds.password, " pass ");
    }

    #[test]
    fn test_registration_rules() {
        assert_eq!(
            message(registration("", "a@b.co", "secret").unwrap_err()),
            "Please enter a username"
        );
        assert_eq!(
            message(registration("bob", "not-an-email", "secret").unwrap_err()),
            "Please enter a valid email address"
        );
        assert_eq!(
            message(registration("bob", "bob@example.com", "12345").unwrap_err()),
            "Password must be at least 6 characters"
        );
        assert!(registration("bob", "bob@example.com", "123456").is_ok());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("alice@example.com"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice example@x.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_article_forms() {
        assert!(new_article("  ", "body").is_err());
        assert!(new_article("Title", "\n").is_err());
        let article = new_article(" Title ", "body").unwrap();
        assert_eq!(article.title, "Title");

        assert!(article_update(None, None).is_err());
        assert!(article_update(Some(""), None).is_err());
        let update = article_update(None, Some("new body")).unwrap();
        assert_eq!(update.title, None);
        assert_eq!(update.content.as_deref(), Some("new body"));
    }

    #[test]
    fn test_comment_requires_content() {
        assert_eq!(
            message(new_comment("   ").unwrap_err()),
            "Please enter a comment"
        );
        assert_eq!(new_comment("nice post").unwrap().content, "nice post");
    }

    #[test]
    fn test_profile_update() {
        assert!(profile_update(None, None).is_err());
        assert!(profile_update(Some(" "), None).is_err());
        let update = profile_update(None, Some("")).unwrap();
        assert_eq!(update.avatar.as_deref(), Some(""));
    }
}
