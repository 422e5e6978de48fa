//! Outbound delivery of submissions.
//!
//! [`ChatTransport`] is the "send function" a [`ChatWidget`](crate::ChatWidget)
//! is constructed with. [`HttpTransport`] is the production implementation:
//! one JSON `POST` per submission, no retry and no client-side timeout.
//!
//! ```rust,no_run
//! use chatline_models::ChatRequest;
//! use chatline_sdk::{ChatTransport, HttpTransport};
//!
//! # async fn run() -> Result<(), chatline_sdk::DeliveryError> {
//! let transport = HttpTransport::new("http://localhost:5000/chat");
//! let reply = transport.send(&ChatRequest::new("Hello")).await?;
//! println!("{}", reply.response);
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use chatline_models::{ChatRequest, ChatResponse};
use tracing::debug;

use crate::error::DeliveryError;

/// Delivers one [`ChatRequest`] and resolves to the endpoint's reply.
///
/// Each call has exactly one outcome. Implementations must not retry.
pub trait ChatTransport {
    /// Send `request` and wait for the reply.
    fn send(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatResponse, DeliveryError>> + Send;
}

/// [`ChatTransport`] over HTTP using `reqwest`.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport posting to `endpoint` with a default client.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Create a transport reusing an existing `reqwest` client.
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// The URL submissions are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatTransport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, DeliveryError> {
        debug!(endpoint = %self.endpoint, "posting chat message");

        let res = self.http.post(&self.endpoint).json(request).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(DeliveryError::HttpStatus(status.as_u16()));
        }

        let body = res.bytes().await?;
        let reply: ChatResponse = serde_json::from_slice(&body)?;

        debug!(endpoint = %self.endpoint, bytes = body.len(), "reply received");
        Ok(reply)
    }
}
