//! The chat widget state machine.
//!
//! A [`ChatWidget`] owns an input field, a render target and a transport.
//! Each submission walks `Idle -> AwaitingReply -> Idle`:
//!
//! 1. [`begin_submit`](ChatWidget::begin_submit) trims the text, appends the
//!    user message, clears the input and shows the typing indicator. It
//!    hands back a [`Submission`] for the caller to deliver.
//! 2. [`complete`](ChatWidget::complete) clears the indicator and appends
//!    the reply, or the configured fallback text when delivery failed.
//!
//! [`submit`](ChatWidget::submit) chains both steps around the widget's own
//! transport. Front ends that must stay responsive while a reply is
//! outstanding call the two halves themselves and run the transport on a
//! separate task.
//!
//! Only one submission can be outstanding. While a reply is awaited,
//! `begin_submit` returns [`SubmitOutcome::Busy`] and leaves everything as
//! it was.

use chatline_models::{ChatRequest, ChatResponse, Message, SubmissionId};
use tracing::{debug, error, info, warn};

use crate::config::WidgetConfig;
use crate::error::DeliveryError;
use crate::transport::ChatTransport;
use crate::view::{ConversationView, PendingIndicator, RenderTarget};

/// A request the widget has rendered and that now needs delivering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Identifier to pass back to [`ChatWidget::complete`].
    pub id: SubmissionId,
    /// Body to send to the endpoint.
    pub request: ChatRequest,
}

/// Result of [`ChatWidget::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The text was empty after trimming. Nothing changed.
    Ignored,
    /// A reply is still awaited. Nothing changed.
    Busy,
    /// The user message and indicator are rendered; deliver the request.
    Dispatched(Submission),
}

/// Result of [`ChatWidget::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The reply was rendered as a bot message.
    Replied,
    /// Delivery failed and the fallback text was rendered.
    FellBack(DeliveryError),
    /// The id did not match the outstanding submission. Nothing changed.
    Stale,
}

/// Chat widget bound to one transport and one render target.
pub struct ChatWidget<T, V = ConversationView> {
    transport: T,
    view: V,
    config: WidgetConfig,
    input: String,
    pending: Option<PendingIndicator>,
    last_error: Option<DeliveryError>,
}

impl<T, V> ChatWidget<T, V>
where
    T: ChatTransport,
    V: RenderTarget,
{
    /// Create an idle widget with an empty input field.
    pub fn new(transport: T, view: V, config: WidgetConfig) -> Self {
        Self {
            transport,
            view,
            config,
            input: String::new(),
            pending: None,
            last_error: None,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Current contents of the input field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the contents of the input field.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Mutable access to the input field for in-place editing.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// The render target.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the render target (scrolling and the like).
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The transport submissions are delivered through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The widget configuration.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The indicator of the outstanding submission, if any.
    pub fn pending(&self) -> Option<&PendingIndicator> {
        self.pending.as_ref()
    }

    /// `true` between a dispatched submission and its completion.
    pub fn is_awaiting_reply(&self) -> bool {
        self.pending.is_some()
    }

    /// Cause of the most recent failed delivery, cleared by the next reply.
    pub fn last_error(&self) -> Option<&DeliveryError> {
        self.last_error.as_ref()
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Render a submission of `raw` and return the request to deliver.
    pub fn begin_submit(&mut self, raw: &str) -> SubmitOutcome {
        let Ok(message) = Message::user(raw) else {
            return SubmitOutcome::Ignored;
        };

        if let Some(pending) = &self.pending {
            debug!(submission = %pending.submission, "submission rejected, reply outstanding");
            return SubmitOutcome::Busy;
        }

        let id = SubmissionId::new();
        let request = ChatRequest::new(message.text());

        self.view.append_message(&message);
        self.view.scroll_to_latest();
        self.input.clear();

        let indicator = PendingIndicator {
            submission: id,
            label: self.config.typing_text.clone(),
        };
        self.view.show_indicator(&indicator);
        self.view.scroll_to_latest();
        self.pending = Some(indicator);

        info!(submission = %id, chars = request.message.chars().count(), "message submitted");

        SubmitOutcome::Dispatched(Submission { id, request })
    }

    /// Submit the current contents of the input field.
    pub fn begin_submit_input(&mut self) -> SubmitOutcome {
        let raw = self.input.clone();
        self.begin_submit(&raw)
    }

    /// Apply the outcome of delivering submission `id`.
    pub fn complete(
        &mut self,
        id: SubmissionId,
        result: Result<ChatResponse, DeliveryError>,
    ) -> Completion {
        let Some(indicator) = self.pending.take_if(|p| p.submission == id) else {
            warn!(submission = %id, "completion for unknown submission ignored");
            return Completion::Stale;
        };

        self.view.clear_indicator(&indicator);

        let completion = match result {
            Ok(reply) => {
                info!(submission = %id, "reply received");
                self.view.append_message(&Message::bot(reply.response));
                self.last_error = None;
                Completion::Replied
            }
            Err(err) => {
                error!(submission = %id, kind = err.kind(), error = %err, "delivery failed");
                self.view
                    .append_message(&Message::bot(self.config.fallback_text.clone()));
                self.last_error = Some(err.clone());
                Completion::FellBack(err)
            }
        };

        self.view.scroll_to_latest();
        completion
    }

    /// Submit `raw`, deliver it through the widget's transport and render
    /// the outcome.
    ///
    /// Returns `None` when nothing was sent (empty text or busy).
    pub async fn submit(&mut self, raw: &str) -> Option<Completion> {
        let SubmitOutcome::Dispatched(submission) = self.begin_submit(raw) else {
            return None;
        };

        let result = self.transport.send(&submission.request).await;
        Some(self.complete(submission.id, result))
    }
}
