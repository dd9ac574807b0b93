//! Client Error Types
//!
//! Every backend call resolves to a [`ClientError`]. The dashboard only ever
//! shows [`ClientError::user_message`], which prefers the backend's own
//! message, then the transport's, then a generic fallback.

use serde_json::Value;
use thiserror::Error;

/// Shown when neither the backend nor the transport produced a message
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Errors surfaced by the API client and the flows built on it
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request exceeded the client-wide timeout
    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),

    /// Connection refused, DNS failure, CORS rejection and the like
    #[error("{0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// The backend answered 2xx but the body could not be decoded
    #[error("Parse error: {0}")]
    Decode(String),

    /// Rejected before any request was issued
    #[error("{0}")]
    Validation(String),

    /// The owning widget went away before the response arrived
    #[error("Request cancelled")]
    Cancelled,

    /// The client could not be built from its configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Build a backend error from a status code and raw response body.
    ///
    /// Looks for a structured `detail` (string, or a list of `{msg}` entries
    /// as produced by request validation), then `error`. Falls back to the
    /// transport-style status message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| extract_detail(&value))
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        ClientError::Backend { status, message }
    }

    /// Human-readable message for notifications and error panels
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Whether retrying the same request could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Timeout(_) | ClientError::Network(_) => true,
            ClientError::Backend { status, .. } => *status >= 500,
            ClientError::Decode(_)
            | ClientError::Validation(_)
            | ClientError::Cancelled
            | ClientError::Config(_) => false,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn extract_detail(value: &Value) -> Option<String> {
    match value.get("detail") {
        Some(Value::String(s)) => {
            if let Some(msg) = non_empty(s) {
                return Some(msg);
            }
        }
        Some(Value::Array(items)) => {
            if let Some(msg) = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .find_map(non_empty)
            {
                return Some(msg);
            }
        }
        _ => {}
    }

    value.get("error").and_then(Value::as_str).and_then(non_empty)
}
