//! The `{success, message, data}` wrapper every API reply uses.

use serde::{Deserialize, Serialize};

/// Response envelope returned by every endpoint.
///
/// `data` is absent on data-less replies (deletes) and on failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl<T> Envelope<T> {
    /// Builds a successful envelope carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error_code: None,
        }
    }

    /// Builds a failed envelope with a display message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            error_code: None,
        }
    }

    /// Returns the server message when it is present and non-blank.
    pub fn display_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}
