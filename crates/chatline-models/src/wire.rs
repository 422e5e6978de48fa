//! JSON bodies exchanged with the chat endpoint.
//!
//! ```text
//! POST <endpoint>            Content-Type: application/json
//! → {"message": "Hello"}
//! ← {"response": "Hi there"}
//! ```
//!
//! The server uses the same `response` field for error bodies, so a client
//! that ignores the status code still has something to show.

use serde::{Deserialize, Serialize};

/// Body of the outbound `POST` carrying the submitted text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// The trimmed text the user submitted.
    pub message: String,
}

impl ChatRequest {
    /// Create a request for the given text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by the chat endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    /// Reply text, rendered verbatim as a bot message.
    pub response: String,
}

impl ChatResponse {
    /// Create a response with the given reply text.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}
