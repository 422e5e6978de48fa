//! Render targets for the chat widget.
//!
//! A [`ChatWidget`](crate::ChatWidget) never draws anything itself. It
//! reports view changes to a [`RenderTarget`]: message appends, the typing
//! indicator appearing and disappearing, and "scroll to the latest entry".
//!
//! [`ConversationView`] is the in-memory target used by the terminal front
//! end and by tests: an append-only message list plus the indicator slot.

use chatline_models::{Message, SubmissionId};

/// Transient "a reply is awaited" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingIndicator {
    /// Submission this indicator belongs to.
    pub submission: SubmissionId,
    /// Text shown while the reply is outstanding.
    pub label: String,
}

/// Output surface of a chat widget.
pub trait RenderTarget {
    /// Append a message at the end of the conversation.
    fn append_message(&mut self, message: &Message);

    /// Show the typing indicator after the last message.
    fn show_indicator(&mut self, indicator: &PendingIndicator);

    /// Remove the typing indicator shown for the same submission.
    fn clear_indicator(&mut self, indicator: &PendingIndicator);

    /// Bring the most recent entry into view.
    fn scroll_to_latest(&mut self);
}

/// Append-only conversation with an optional indicator slot.
///
/// `scroll_back` counts lines scrolled up from the bottom; `0` means the
/// latest entry is visible. It never exceeds the scroll limit, which the
/// front end sets to the number of lines hidden above the viewport.
#[derive(Debug, Clone, Default)]
pub struct ConversationView {
    messages: Vec<Message>,
    indicator: Option<PendingIndicator>,
    scroll_back: u16,
    scroll_limit: u16,
}

impl ConversationView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// The indicator currently shown, if any.
    pub fn indicator(&self) -> Option<&PendingIndicator> {
        self.indicator.as_ref()
    }

    /// Number of lines scrolled up from the bottom.
    pub fn scroll_back(&self) -> u16 {
        self.scroll_back
    }

    /// Set how far back the view can scroll, clamping the current offset.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.scroll_back = self.scroll_back.min(limit);
    }

    /// Scroll towards older messages, stopping at the scroll limit.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back.saturating_add(lines).min(self.scroll_limit);
    }

    /// Scroll towards the latest message.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// `true` when nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl RenderTarget for ConversationView {
    fn append_message(&mut self, message: &Message) {
        self.messages.push(message.clone());
    }

    fn show_indicator(&mut self, indicator: &PendingIndicator) {
        self.indicator = Some(indicator.clone());
    }

    fn clear_indicator(&mut self, indicator: &PendingIndicator) {
        if self
            .indicator
            .as_ref()
            .is_some_and(|shown| shown.submission == indicator.submission)
        {
            self.indicator = None;
        }
    }

    fn scroll_to_latest(&mut self) {
        self.scroll_back = 0;
    }
}
