#![deny(missing_docs)]

//! # Chatline Models
//!
//! Core data types shared by the chat widget, the command-line front end
//! and the reference chat server.
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`message`] | Conversation entries (`Message`, `Sender`) and `SubmissionId` |
//! | [`wire`] | JSON bodies exchanged with the chat endpoint |
//! | [`error`] | `ModelError` |

pub mod error;
pub mod message;
pub mod wire;

// Re-export all public types at crate root for convenience.
pub use error::*;
pub use message::*;
pub use wire::*;
