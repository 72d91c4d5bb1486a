//! Error types for calls against the posts API.
//!
//! Provides structured classification so callers can tell transport
//! failures from rejected requests and unreadable bodies.

use thiserror::Error;

/// Errors that can occur while talking to the remote API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configured base URL could not be parsed
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Request never produced a response
    #[error("{operation} failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{operation} returned HTTP {status}")]
    Status { operation: &'static str, status: u16 },

    /// Response body did not match the expected shape
    #[error("{operation} returned an unreadable body: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Short machine-friendly kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
        }
    }

    /// HTTP status, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_names_operation() {
        let err = ApiError::Status {
            operation: "update post",
            status: 404,
        };
        assert_eq!(err.to_string(), "update post returned HTTP 404");
        assert_eq!(err.kind(), "status");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn invalid_base_url_has_no_status() {
        let err = ApiError::InvalidBaseUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(err.kind(), "invalid_base_url");
    }
}
