//! # Chatline SDK
//!
//! Client side of a Chatline conversation.
//!
//! The SDK provides:
//!
//! * [`ChatWidget`]: the submission state machine (input field, user and
//!   bot messages, typing indicator, fallback on failure).
//! * [`RenderTarget`] / [`ConversationView`]: where the widget draws.
//! * [`ChatTransport`] / [`HttpTransport`]: how a submission reaches the
//!   chat endpoint.
//! * [`DeliveryError`]: tagged failure of a single submission.
//! * [`WidgetConfig`]: endpoint and user-facing texts.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use chatline_sdk::{ChatWidget, ConversationView, HttpTransport, WidgetConfig};
//!
//! # async fn run() {
//! let config = WidgetConfig::from_env();
//! let transport = HttpTransport::new(config.endpoint.clone());
//! let mut widget = ChatWidget::new(transport, ConversationView::new(), config);
//!
//! widget.submit("Hello").await;
//! for message in widget.view().messages() {
//!     println!("{}: {}", message.sender(), message.text());
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod transport;
pub mod view;
pub mod widget;

pub use config::WidgetConfig;
pub use error::DeliveryError;
pub use transport::{ChatTransport, HttpTransport};
pub use view::{ConversationView, PendingIndicator, RenderTarget};
pub use widget::{ChatWidget, Completion, SubmitOutcome, Submission};

// Re-export the shared models for ergonomic usage.
pub use chatline_models::{ChatRequest, ChatResponse, Message, Sender, SubmissionId};
