//! Error types for the `chatline-models` crate.

/// Errors produced when constructing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A user message was empty once surrounding whitespace was removed.
    #[error("message text must not be empty")]
    EmptyMessage,
}
