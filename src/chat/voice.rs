//! Voice input as an external capability.
//!
//! Recognition itself happens elsewhere; this module only tracks whether we
//! are listening and forwards final transcripts to the controller as if
//! they had been typed.

use anyhow::Result;

use super::controller::{ChatController, SendOutcome};
use crate::error::ChatError;

/// A speech recognizer that can be started and stopped.
pub trait TranscriptSource {
    fn start(&mut self) -> Result<()>;
    fn stop(&mut self);
}

/// Transcripts are whatever the learner types while listening is on.
#[derive(Debug, Default)]
pub struct TypedTranscripts;

impl TranscriptSource for TypedTranscripts {
    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) {}
}

/// Listening toggle in front of a [`TranscriptSource`].
#[derive(Debug, Default)]
pub struct VoiceInput<S> {
    source: S,
    listening: bool,
}

impl<S: TranscriptSource> VoiceInput<S> {
    pub const fn new(source: S) -> Self {
        Self {
            source,
            listening: false,
        }
    }

    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    /// Starts or stops listening and returns the new state.
    pub fn toggle(&mut self) -> Result<bool> {
        if self.listening {
            self.source.stop();
            self.listening = false;
        } else {
            self.source.start()?;
            self.listening = true;
        }
        Ok(self.listening)
    }

    /// Handles a final transcript.
    ///
    /// Recognition ends with each final result, so listening is switched
    /// off before the text is sent. Transcripts arriving while not
    /// listening are ignored.
    pub async fn deliver(
        &mut self,
        controller: &ChatController,
        transcript: &str,
    ) -> Result<SendOutcome, ChatError> {
        if !self.listening {
            return Ok(SendOutcome::Ignored);
        }
        self.source.stop();
        self.listening = false;
        controller.send(transcript).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::{ChatBackend, TranslateBackend};
    use crate::error::BackendError;
    use async_trait::async_trait;
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingSource {
        starts: usize,
        stops: usize,
    }

    impl TranscriptSource for CountingSource {
        fn start(&mut self) -> Result<()> {
            self.starts += 1;
            Ok(())
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    struct Echo;

    #[async_trait]
    impl ChatBackend for Echo {
        async fn chat(&self, message: &str) -> Result<String, BackendError> {
            Ok(format!("you said {message}"))
        }
    }

    #[async_trait]
    impl TranslateBackend for Echo {
        async fn translate(&self, texts: &[&str], _: &str) -> Result<Vec<String>, BackendError> {
            Ok(texts.iter().map(ToString::to_string).collect())
        }

        fn endpoint(&self) -> &str {
            "test://echo"
        }
    }

    fn controller() -> ChatController {
        let echo = Arc::new(Echo);
        ChatController::new(echo.clone(), echo, "en")
    }

    #[test]
    fn test_toggle() {
        let mut voice = VoiceInput::new(CountingSource::default());

        assert!(voice.toggle().unwrap());
        assert!(!voice.toggle().unwrap());
        assert_eq!(voice.source.starts, 1);
        assert_eq!(voice.source.stops, 1);
    }

    #[tokio::test]
    async fn test_transcript_is_sent_like_typed_text() {
        let controller = controller();
        let mut voice = VoiceInput::new(TypedTranscripts);
        voice.toggle().unwrap();

        let outcome = voice.deliver(&controller, "vanakkam").await.unwrap();

        assert_eq!(outcome, SendOutcome::Replied);
        assert!(!voice.is_listening());
        assert_eq!(controller.history()[1].text, "you said vanakkam");
    }

    #[tokio::test]
    async fn test_transcript_ignored_when_not_listening() {
        let controller = controller();
        let mut voice = VoiceInput::new(TypedTranscripts);

        let outcome = voice.deliver(&controller, "vanakkam").await.unwrap();

        assert_eq!(outcome, SendOutcome::Ignored);
        assert!(controller.history().is_empty());
    }
}
