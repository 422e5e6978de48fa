//! Error types for the Chatline server.
//!
//! [`ServerError`] implements [`axum::response::IntoResponse`] so handlers
//! can return `Result<…, ServerError>` directly. Error bodies reuse the
//! `response` field of a normal reply, so a client that only reads that
//! field still shows something sensible.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chatline_models::ChatResponse;

/// Body text returned for rejected requests.
pub const INVALID_REQUEST_TEXT: &str = "Error: invalid request";

/// Errors that can occur while answering a chat request.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The body was not a JSON object with a string `message` field.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::InvalidRequest(_) => (StatusCode::BAD_REQUEST, INVALID_REQUEST_TEXT),
        };

        tracing::warn!(%status, error = %self, "request rejected");
        (status, Json(ChatResponse::new(body))).into_response()
    }
}
