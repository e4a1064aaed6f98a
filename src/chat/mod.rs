//! Interactive tutoring chat.
//!
//! [`ChatController`] owns the conversation and its request cycle;
//! [`ChatSession`] is the terminal REPL on top of it.

/// Slash command parsing and autocomplete.
pub mod command;
mod controller;
mod message;
mod session;
mod ui;
mod voice;

pub use controller::{ChatController, ChatState, SendOutcome};
pub use message::{ChatMessage, FAILURE_NOTICE, Sender};
pub use session::{ChatSession, SessionConfig};
pub use voice::{TranscriptSource, TypedTranscripts, VoiceInput};
