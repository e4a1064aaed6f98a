use serde::{Deserialize, Serialize};

/// Text shown in place of a reply when the chat backend fails.
pub const FAILURE_NOTICE: &str = "Sorry, something went wrong.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry of the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// The text rendered in the learner's display language, when it differs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>, translated_text: Option<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            translated_text,
        }
    }

    pub fn bot(text: impl Into<String>, translated_text: Option<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            translated_text,
        }
    }

    /// The synthetic bot message recorded when a round trip fails.
    pub fn failure() -> Self {
        Self::bot(FAILURE_NOTICE, None)
    }

    /// Text to show the learner: the translation if present, else the original.
    pub fn display_text(&self) -> &str {
        self.translated_text.as_deref().unwrap_or(&self.text)
    }
}
