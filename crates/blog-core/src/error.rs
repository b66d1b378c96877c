//! Errors surfaced by the API client and services.

use std::time::Duration;

use thiserror::Error;

/// Everything a call to the blog API can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not finish within the configured timeout.
    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// Connection refused, DNS failure, broken body, ...
    #[error("Network error: {0}")]
    Network(String),

    /// 401 from the server. The session has already been cleared.
    #[error("{}", .message.as_deref().unwrap_or("Session expired or invalid"))]
    Unauthorized { message: Option<String> },

    /// Any other non-2xx reply.
    #[error("HTTP {status}: {message}")]
    Status {
        status: u16,
        message: String,
        error_code: Option<String>,
    },

    /// 2xx reply whose envelope says `success: false`.
    #[error("{}", .message.as_deref().unwrap_or("Request was rejected by the server"))]
    Rejected {
        message: Option<String>,
        error_code: Option<String>,
    },

    /// The reply body was not the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Input refused before any request was sent.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The server-provided message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Rejected { message, .. } => {
                message.as_deref()
            }
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Maps a reqwest failure onto the error taxonomy.
pub(crate) fn classify_reqwest_error(e: &reqwest::Error, timeout: Duration) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout(timeout)
    } else if e.is_connect() {
        ApiError::Network(format!("Connection failed: {e}"))
    } else if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_server_message() {
        let err = ApiError::Rejected {
            message: Some("邮箱或密码错误".into()),
            error_code: Some("UNAUTHORIZED".into()),
        };
        assert_eq!(err.to_string(), "邮箱或密码错误");
        assert_eq!(err.server_message(), Some("邮箱或密码错误"));
    }

    #[test]
    fn test_fallback_messages() {
        let err = ApiError::Unauthorized { message: None };
        assert_eq!(err.to_string(), "Session expired or invalid");
        assert!(err.is_unauthorized());

        let err = ApiError::Rejected {
            message: None,
            error_code: None,
        };
        assert_eq!(err.to_string(), "Request was rejected by the server");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_status_display() {
        let err = ApiError::Status {
            status: 404,
            message: "文章不存在".into(),
            error_code: Some("NOT_FOUND".into()),
        };
        assert_eq!(err.to_string(), "HTTP 404: 文章不存在");
    }

    #[test]
    fn test_timeout_display() {
        let err = ApiError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "Request timed out after 1.5s");
    }
}
