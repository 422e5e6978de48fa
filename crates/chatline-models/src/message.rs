//! Conversation entries.
//!
//! A conversation is an append-only list of [`Message`]s. Each message
//! records who sent it ([`Sender`]), its text and the moment it was
//! created. Messages never change once they have been rendered.
//!
//! Every submission made through the chat widget is tagged with a
//! [`SubmissionId`] so its completion can be matched to the typing
//! indicator it must clear.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// Sender
// ---------------------------------------------------------------------------

/// Author of a [`Message`].
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    /// Text typed and submitted by the local user.
    User,
    /// Text returned by the chat endpoint (or the delivery fallback).
    Bot,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// One entry of a conversation.
///
/// User messages can only be built from text that is non-empty after
/// trimming, see [`Message::user`]. Bot messages keep the reply text
/// verbatim.
///
/// # Examples
///
/// ```
/// use chatline_models::{Message, Sender};
///
/// let msg = Message::user("  Hello \n").unwrap();
/// assert_eq!(msg.text(), "Hello");
/// assert_eq!(msg.sender(), Sender::User);
///
/// assert!(Message::user("   ").is_err());
/// ```
///
/// Messages serialize for transcripts and logs but are not deserialized:
/// the constructors are the only way in, so a blank user message cannot
/// be read back from JSON.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    sender: Sender,
    text: String,
    sent_at: DateTime<Utc>,
}

impl Message {
    /// Build a user message from raw input, trimming surrounding whitespace.
    pub fn user(raw: &str) -> Result<Self, ModelError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(ModelError::EmptyMessage);
        }
        Ok(Self {
            sender: Sender::User,
            text: text.to_string(),
            sent_at: Utc::now(),
        })
    }

    /// Build a bot message. The text is stored exactly as given.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    /// Who wrote this message.
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// The message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Creation timestamp (UTC).
    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    /// `true` when the local user wrote this message.
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

// ---------------------------------------------------------------------------
// SubmissionId
// ---------------------------------------------------------------------------

/// Identifier of a single request/response cycle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for SubmissionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for SubmissionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_is_trimmed() {
        let msg = Message::user("\t ping  ").unwrap();
        assert_eq!(msg.text(), "ping");
        assert!(msg.is_from_user());
    }

    #[test]
    fn whitespace_only_user_message_is_rejected() {
        for raw in ["", " ", "   ", "\n\t \r\n"] {
            assert_eq!(Message::user(raw), Err(ModelError::EmptyMessage));
        }
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let msg = Message::user("  who   are you ").unwrap();
        assert_eq!(msg.text(), "who   are you");
    }

    #[test]
    fn bot_message_is_verbatim() {
        let msg = Message::bot("  Hi there \n");
        assert_eq!(msg.text(), "  Hi there \n");
        assert_eq!(msg.sender(), Sender::Bot);
        assert!(!msg.is_from_user());
    }

    #[test]
    fn bot_message_may_be_empty() {
        assert_eq!(Message::bot("").text(), "");
    }

    #[test]
    fn sender_display_and_parse() {
        assert_eq!(Sender::User.to_string(), "user");
        assert_eq!(Sender::Bot.to_string(), "bot");
        assert_eq!("bot".parse::<Sender>().unwrap(), Sender::Bot);
        assert!("robot".parse::<Sender>().is_err());
    }

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
    }

    #[test]
    fn message_serializes_sender_text_and_timestamp() {
        let msg = Message::user(" hi ").unwrap();
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "user");
        assert_eq!(json["text"], "hi");
        assert!(json["sent_at"].is_string());
    }

    #[test]
    fn submission_ids_are_unique() {
        assert_ne!(SubmissionId::new(), SubmissionId::new());
    }

    #[test]
    fn submission_id_parses_its_display() {
        let id = SubmissionId::new();
        let back: SubmissionId = id.to_string().parse().unwrap();
        assert_eq!(id, back);
    }
}
