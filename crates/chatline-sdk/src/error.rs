//! SDK error types.
//!
//! [`DeliveryError`] is the single failure kind of a submission. It keeps
//! the cause tagged (transport, HTTP status, decoding) so the caller can
//! log or display it, while the widget itself renders the same fallback
//! text for all of them.

/// Why a submission did not produce a reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The request could not be sent or the connection failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status code.
    #[error("endpoint returned HTTP {0}")]
    HttpStatus(u16),

    /// The response body was not the expected `{"response": ...}` shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl DeliveryError {
    /// Short label for the failure kind, suitable for a status line.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::HttpStatus(_) => "http-status",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for DeliveryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DeliveryError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            DeliveryError::HttpStatus(status.as_u16())
        } else {
            DeliveryError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DeliveryError {
    fn from(e: serde_json::Error) -> Self {
        DeliveryError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_cause() {
        assert_eq!(
            DeliveryError::HttpStatus(503).to_string(),
            "endpoint returned HTTP 503"
        );
        assert_eq!(
            DeliveryError::Transport("connection refused".into()).to_string(),
            "transport error: connection refused"
        );
    }

    #[test]
    fn json_errors_become_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let delivery: DeliveryError = err.into();
        assert_eq!(delivery.kind(), "decode");
    }
}
