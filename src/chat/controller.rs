use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

use super::message::ChatMessage;
use crate::backend::{ChatBackend, TranslateBackend};
use crate::error::ChatError;
use crate::translation::BASE_LANGUAGE;

/// Where the controller is in its request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    /// A round trip is in flight; new messages are rejected.
    Pending,
    /// The last round trip failed. New messages are accepted.
    Failed,
}

/// What happened to a message passed to [`ChatController::send_message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input; nothing was sent or recorded.
    Ignored,
    /// The user message and the backend's reply were recorded.
    Replied,
    /// The user message and the failure notice were recorded.
    Failed,
}

struct Inner {
    history: Vec<ChatMessage>,
    state: ChatState,
    display_language: String,
}

/// Drives message exchange with the chat backend.
///
/// History is append-only. At most one round trip runs at a time: a call
/// made while another is pending returns [`ChatError::Busy`].
pub struct ChatController {
    chat: Arc<dyn ChatBackend>,
    translator: Arc<dyn TranslateBackend>,
    base_language: String,
    inner: Mutex<Inner>,
}

impl ChatController {
    pub fn new(
        chat: Arc<dyn ChatBackend>,
        translator: Arc<dyn TranslateBackend>,
        display_language: impl Into<String>,
    ) -> Self {
        Self {
            chat,
            translator,
            base_language: BASE_LANGUAGE.to_string(),
            inner: Mutex::new(Inner {
                history: Vec::new(),
                state: ChatState::Idle,
                display_language: display_language.into(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn history(&self) -> Vec<ChatMessage> {
        self.lock().history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }

    /// Messages appended after the first `start` entries.
    pub fn history_since(&self, start: usize) -> Vec<ChatMessage> {
        self.lock().history.get(start..).map(<[_]>::to_vec).unwrap_or_default()
    }

    pub fn state(&self) -> ChatState {
        self.lock().state
    }

    pub fn is_pending(&self) -> bool {
        self.state() == ChatState::Pending
    }

    pub fn display_language(&self) -> String {
        self.lock().display_language.clone()
    }

    /// Changes the language used by later [`send`](Self::send) calls.
    /// A round trip already in flight keeps the language it started with.
    pub fn set_display_language(&self, code: impl Into<String>) {
        self.lock().display_language = code.into();
    }

    /// Sends `raw_text` using the current display language.
    pub async fn send(&self, raw_text: &str) -> Result<SendOutcome, ChatError> {
        let display_language = self.display_language();
        self.send_message(raw_text, &display_language).await
    }

    /// Sends one message and records both sides of the exchange.
    ///
    /// Input in a non-base display language is translated to the base
    /// language for the backend, and echoed in the display language; the
    /// reply is translated back. Translation failures fall back to the
    /// untranslated text. A chat failure is recorded as
    /// [`ChatMessage::failure`] and reported as [`SendOutcome::Failed`],
    /// never as an error.
    pub async fn send_message(
        &self,
        raw_text: &str,
        display_language: &str,
    ) -> Result<SendOutcome, ChatError> {
        if raw_text.trim().is_empty() {
            return Ok(SendOutcome::Ignored);
        }

        let guard = self.begin()?;
        let translating = display_language != self.base_language;

        let (text_for_backend, display_echo) = if translating {
            tokio::join!(
                self.translate_or_original(raw_text, &self.base_language),
                self.translate_or_original(raw_text, display_language),
            )
        } else {
            (raw_text.to_string(), raw_text.to_string())
        };

        self.append(ChatMessage::user(
            raw_text,
            (display_echo != raw_text).then_some(display_echo),
        ));

        match self.chat.chat(&text_for_backend).await {
            Ok(reply) => {
                let translated_reply = if translating {
                    let translated = self.translate_or_original(&reply, display_language).await;
                    (translated != reply).then_some(translated)
                } else {
                    None
                };
                self.append(ChatMessage::bot(reply, translated_reply));
                guard.finish(ChatState::Idle);
                Ok(SendOutcome::Replied)
            }
            Err(error) => {
                warn!(%error, "chat request failed");
                self.append(ChatMessage::failure());
                guard.finish(ChatState::Failed);
                Ok(SendOutcome::Failed)
            }
        }
    }

    fn begin(&self) -> Result<PendingGuard<'_>, ChatError> {
        let mut inner = self.lock();
        if inner.state == ChatState::Pending {
            return Err(ChatError::Busy);
        }
        inner.state = ChatState::Pending;
        Ok(PendingGuard {
            inner: &self.inner,
            next: ChatState::Idle,
        })
    }

    fn append(&self, message: ChatMessage) {
        self.lock().history.push(message);
    }

    async fn translate_or_original(&self, text: &str, target_lang: &str) -> String {
        match self.translator.translate(&[text], target_lang).await {
            Ok(mut translated) if translated.len() == 1 => translated.remove(0),
            Ok(translated) => {
                warn!(
                    target_lang,
                    returned = translated.len(),
                    "translation returned wrong number of strings, using original text"
                );
                text.to_string()
            }
            Err(error) => {
                debug!(target_lang, %error, "translation failed, using original text");
                text.to_string()
            }
        }
    }
}

/// Leaves the pending state exactly once, including when the round trip's
/// future is dropped before it completes.
struct PendingGuard<'a> {
    inner: &'a Mutex<Inner>,
    next: ChatState,
}

impl PendingGuard<'_> {
    fn finish(mut self, state: ChatState) {
        self.next = state;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.state = self.next;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chat::message::{FAILURE_NOTICE, Sender};
    use crate::error::BackendError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    struct FixedChat {
        reply: Option<&'static str>,
        calls: AtomicUsize,
        received: Mutex<Vec<String>>,
    }

    impl FixedChat {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply: Some(reply),
                calls: AtomicUsize::new(0),
                received: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                ..Self::replying("")
            }
        }
    }

    #[async_trait]
    impl ChatBackend for FixedChat {
        async fn chat(&self, message: &str) -> Result<String, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.received.lock().unwrap().push(message.to_string());
            self.reply
                .map(ToString::to_string)
                .ok_or_else(|| BackendError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    message: None,
                })
        }
    }

    /// Reverses strings for any non-base target, returns them unchanged for the base.
    struct Reverser;

    #[async_trait]
    impl TranslateBackend for Reverser {
        async fn translate(
            &self,
            texts: &[&str],
            target_lang: &str,
        ) -> Result<Vec<String>, BackendError> {
            Ok(texts
                .iter()
                .map(|t| {
                    if target_lang == BASE_LANGUAGE {
                        (*t).to_string()
                    } else {
                        t.chars().rev().collect()
                    }
                })
                .collect())
        }

        fn endpoint(&self) -> &str {
            "test://reverse"
        }
    }

    struct BrokenTranslator;

    #[async_trait]
    impl TranslateBackend for BrokenTranslator {
        async fn translate(&self, _: &[&str], _: &str) -> Result<Vec<String>, BackendError> {
            Err(BackendError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: Some("Translation API failed".to_string()),
            })
        }

        fn endpoint(&self) -> &str {
            "test://broken"
        }
    }

    /// Blocks every chat call until released.
    struct GatedChat {
        gate: Notify,
    }

    #[async_trait]
    impl ChatBackend for GatedChat {
        async fn chat(&self, _: &str) -> Result<String, BackendError> {
            self.gate.notified().await;
            Ok("done".to_string())
        }
    }

    #[tokio::test]
    async fn test_base_language_round_trip() {
        let chat = Arc::new(FixedChat::replying("hello"));
        let controller = ChatController::new(chat.clone(), Arc::new(Reverser), "en");

        let outcome = controller.send_message("hi", "en").await.unwrap();

        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(
            controller.history(),
            vec![
                ChatMessage::user("hi", None),
                ChatMessage::bot("hello", None),
            ]
        );
        assert!(!controller.is_pending());
        assert_eq!(chat.received.lock().unwrap().as_slice(), &["hi"]);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let chat = Arc::new(FixedChat::replying("hello"));
        let controller = ChatController::new(chat.clone(), Arc::new(Reverser), "en");

        let outcome = controller.send_message("   ", "en").await.unwrap();

        assert_eq!(outcome, SendOutcome::Ignored);
        assert!(controller.history().is_empty());
        assert_eq!(chat.calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.state(), ChatState::Idle);
    }

    #[tokio::test]
    async fn test_history_keeps_raw_text() {
        let chat = Arc::new(FixedChat::replying("hello"));
        let controller = ChatController::new(chat.clone(), Arc::new(Reverser), "en");

        controller.send("  vanakkam \n").await.unwrap();

        assert_eq!(controller.history()[0].text, "  vanakkam \n");
        assert_eq!(chat.received.lock().unwrap().as_slice(), &["  vanakkam \n"]);
    }

    #[tokio::test]
    async fn test_failure_records_notice() {
        let controller =
            ChatController::new(Arc::new(FixedChat::failing()), Arc::new(Reverser), "en");

        let outcome = controller.send_message("hi", "en").await.unwrap();

        assert_eq!(outcome, SendOutcome::Failed);
        let history = controller.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].sender, Sender::Bot);
        assert_eq!(history[1].text, FAILURE_NOTICE);
        assert_eq!(controller.state(), ChatState::Failed);
        assert!(!controller.is_pending());
    }

    #[tokio::test]
    async fn test_failed_state_accepts_next_message() {
        let controller =
            ChatController::new(Arc::new(FixedChat::failing()), Arc::new(Reverser), "en");
        controller.send_message("first", "en").await.unwrap();

        let outcome = controller.send_message("second", "en").await;

        assert_eq!(outcome, Ok(SendOutcome::Failed));
        assert_eq!(controller.history_len(), 4);
    }

    #[tokio::test]
    async fn test_display_language_translation() {
        let chat = Arc::new(FixedChat::replying("hello"));
        let controller = ChatController::new(chat.clone(), Arc::new(Reverser), "ta");

        controller.send("hi").await.unwrap();

        let history = controller.history();
        assert_eq!(history[0], ChatMessage::user("hi", Some("ih".to_string())));
        assert_eq!(
            history[1],
            ChatMessage::bot("hello", Some("olleh".to_string()))
        );
        // the base-language leg is an identity under this translator
        assert_eq!(chat.received.lock().unwrap().as_slice(), &["hi"]);
    }

    #[tokio::test]
    async fn test_translation_failure_falls_back_to_original() {
        let chat = Arc::new(FixedChat::replying("hello"));
        let controller = ChatController::new(chat.clone(), Arc::new(BrokenTranslator), "fr");

        let outcome = controller.send("bonjour").await.unwrap();

        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(
            controller.history(),
            vec![
                ChatMessage::user("bonjour", None),
                ChatMessage::bot("hello", None),
            ]
        );
        assert_eq!(chat.received.lock().unwrap().as_slice(), &["bonjour"]);
    }

    #[tokio::test]
    async fn test_overlapping_send_is_busy() {
        let chat = Arc::new(GatedChat {
            gate: Notify::new(),
        });
        let controller = ChatController::new(chat.clone(), Arc::new(Reverser), "en");

        let first = controller.send("one");
        let second = async {
            tokio::task::yield_now().await;
            assert!(controller.is_pending());
            let busy = controller.send("two").await;
            chat.gate.notify_one();
            busy
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, Ok(SendOutcome::Replied));
        assert_eq!(second, Err(ChatError::Busy));
        assert_eq!(controller.history_len(), 2);
        assert_eq!(controller.state(), ChatState::Idle);
    }

    #[tokio::test]
    async fn test_dropped_round_trip_clears_pending() {
        let chat = Arc::new(GatedChat {
            gate: Notify::new(),
        });
        let controller = ChatController::new(chat, Arc::new(Reverser), "en");

        let timed_out = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            controller.send("never answered"),
        )
        .await;

        assert!(timed_out.is_err());
        assert!(!controller.is_pending());
        assert_eq!(controller.history_len(), 1);
    }

    #[tokio::test]
    async fn test_language_change_during_round_trip_keeps_captured_language() {
        let chat = Arc::new(GatedChat {
            gate: Notify::new(),
        });
        let controller = ChatController::new(chat.clone(), Arc::new(Reverser), "ta");

        let first = controller.send("hi");
        let switch = async {
            tokio::task::yield_now().await;
            assert!(controller.is_pending());
            controller.set_display_language("en");
            chat.gate.notify_one();
        };
        let (outcome, ()) = tokio::join!(first, switch);

        assert_eq!(outcome, Ok(SendOutcome::Replied));
        let history = controller.history();
        assert_eq!(history[0].translated_text.as_deref(), Some("ih"));
        assert_eq!(history[1].translated_text.as_deref(), Some("enod"));
        assert_eq!(controller.display_language(), "en");
    }

    #[tokio::test]
    async fn test_language_change_applies_to_next_send() {
        let controller = ChatController::new(
            Arc::new(FixedChat::replying("ok")),
            Arc::new(Reverser),
            "en",
        );

        controller.send("hi").await.unwrap();
        controller.set_display_language("ja");
        controller.send("hi").await.unwrap();

        let history = controller.history_since(2);
        assert_eq!(history[0].translated_text.as_deref(), Some("ih"));
        assert_eq!(history[1].translated_text.as_deref(), Some("ko"));
    }
}
