//! Error types shared by the backend client and the session components.

use std::time::Duration;

use thiserror::Error;

/// Failure of a single backend round trip.
///
/// Variants fall into three kinds: transport (`Transport`, `Timeout`,
/// `Cancelled`), non-success status (`Status`), and response shape
/// (`ShapeMismatch`, `Decode`).
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request could not be sent or the connection failed.
    #[error("Failed to reach backend at {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out after {}s", .timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    /// The caller cancelled the request.
    #[error("Request to {url} was cancelled")]
    Cancelled { url: String },

    /// The backend answered with a non-success HTTP status.
    ///
    /// `message` holds the `error` field of the response body when present.
    #[error("Backend returned {status}{}", detail(.message))]
    Status {
        status: reqwest::StatusCode,
        message: Option<String>,
    },

    /// The response body was not the expected JSON document.
    #[error("Unexpected response body from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// The translate backend returned a different number of strings than it was sent.
    #[error("Translation returned {actual} strings for {expected} inputs")]
    ShapeMismatch { expected: usize, actual: usize },
}

impl BackendError {
    /// Returns `true` for failures where no usable response was received.
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::Cancelled { .. }
        )
    }
}

#[allow(clippy::ref_option)]
fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Rejection of a chat request before it reaches the backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Another round trip is still in flight.
    #[error("A message is already being sent; wait for the reply")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_kinds() {
        let timeout = BackendError::Timeout {
            url: "http://localhost:5000/chat".to_string(),
            timeout: Duration::from_secs(30),
        };
        assert!(timeout.is_transport());
        assert!(timeout.to_string().contains("30s"));

        let cancelled = BackendError::Cancelled {
            url: "http://localhost:5000/chat".to_string(),
        };
        assert!(cancelled.is_transport());

        let mismatch = BackendError::ShapeMismatch {
            expected: 3,
            actual: 2,
        };
        assert!(!mismatch.is_transport());
        assert_eq!(
            mismatch.to_string(),
            "Translation returned 2 strings for 3 inputs"
        );
    }

    #[test]
    fn test_status_message() {
        let err = BackendError::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
            message: Some("No message provided".to_string()),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().ends_with(": No message provided"));
        assert!(!err.is_transport());

        let bare = BackendError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert!(bare.to_string().starts_with("Backend returned 500"));
        assert!(!bare.to_string().contains(": "));
    }
}
