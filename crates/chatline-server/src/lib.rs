//! Chatline reference server: answers chat messages with a keyword bot.
//!
//! Exposes the JSON endpoint the chat widget talks to:
//!
//! ```text
//! POST /chat       {"message": "..."}  →  {"response": "..."}
//! POST /api/chat   (same handler)
//! ```
//!
//! Bodies that are not a JSON object with a string `message` field are
//! rejected with `400 {"response": "Error: invalid request"}`.

pub mod config;
pub mod error;
pub mod responder;

use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::routing::post;
use chatline_models::{ChatRequest, ChatResponse};
use tracing::info;

use crate::error::ServerError;
use crate::responder::{Responder, RuleBasedResponder};

// ---------------------------------------------------------------------------
// Shared application state
// ---------------------------------------------------------------------------

/// State shared across all Axum handlers.
pub struct AppState {
    /// Produces the reply text for each message.
    responder: Box<dyn Responder>,
}

impl AppState {
    /// State backed by the given responder.
    pub fn new(responder: impl Responder + 'static) -> Self {
        Self {
            responder: Box::new(responder),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RuleBasedResponder)
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /chat`: reply to one message.
async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ServerError> {
    let Json(req) =
        payload.map_err(|rejection| ServerError::InvalidRequest(rejection.body_text()))?;

    let reply = state.responder.reply(&req.message);
    info!(
        message_chars = req.message.chars().count(),
        reply_chars = reply.chars().count(),
        "chat message answered"
    );

    Ok(Json(ChatResponse::new(reply)))
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/api/chat", post(chat))
        .with_state(state)
}
