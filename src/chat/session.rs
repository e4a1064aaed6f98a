use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::controller::{ChatController, SendOutcome};
use super::ui;
use super::voice::{TypedTranscripts, VoiceInput};
use crate::backend::HttpBackend;
use crate::cache::DictionaryCache;
use crate::dictionary::TextDictionary;
use crate::translation::{LanguageSwitch, TranslationSession, language_name, validate_language};
use crate::ui::{Spinner, Style, until_interrupted};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The backend name from the config file (for display).
    pub backend_name: String,
    /// The tutor backend base URL.
    pub endpoint: String,
    /// Bearer token, if the backend requires one.
    pub api_key: Option<String>,
    /// Initial display language code.
    pub language: String,
    pub timeout: Duration,
}

/// An interactive tutoring chat.
///
/// Owns the UI text for the active language and the conversation with the
/// tutor backend. Both follow `/lang`. Ctrl+C during a round trip cancels
/// it and ends the session.
pub struct ChatSession {
    config: SessionConfig,
    translation: TranslationSession,
    controller: ChatController,
    voice: VoiceInput<TypedTranscripts>,
    cancel: CancellationToken,
}

impl ChatSession {
    /// Creates a session over one HTTP backend showing `source` as UI text.
    pub fn new(
        config: SessionConfig,
        source: TextDictionary,
        store: Option<DictionaryCache>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let backend = HttpBackend::new(
            config.endpoint.clone(),
            config.api_key.clone(),
            config.timeout,
        )
        .with_cancellation(cancel.clone());
        let backend = Arc::new(backend);

        let mut translation = TranslationSession::new(backend.clone(), source);
        if let Some(store) = store {
            translation = translation.with_store(store);
        }
        let controller = ChatController::new(backend.clone(), backend, translation.base_language());

        Self {
            config,
            translation,
            controller,
            voice: VoiceInput::new(TypedTranscripts),
            cancel,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let initial = self.config.language.clone();
        if initial != self.translation.base_language() {
            self.switch_language(&initial).await;
        }

        ui::print_header(&self.translation.active_dictionary());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let text = self.translation.active_dictionary();
            let help = if self.voice.is_listening() {
                text.text_or("chat_listening", "Listening...")
            } else {
                text.text_or(
                    "chat_help",
                    "Type a message, /help for commands, Ctrl+C to quit",
                )
            };

            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder(text.text_or("chat_placeholder", "Type your message..."))
                .with_help_message(help)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(message) => {
                        if !self.send_and_print(&message).await {
                            break;
                        }
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye(&self.translation.active_dictionary());
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(
                    &self.config,
                    self.translation.active_language(),
                    self.voice.is_listening(),
                );
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => ui::print_history(&self.controller.history()),
            SlashCommand::Lang(None) => {
                let code = self.translation.active_language();
                println!(
                    "Display language: {} {}\n",
                    Style::value(code),
                    Style::secondary(language_name(code).unwrap_or_default())
                );
            }
            SlashCommand::Lang(Some(code)) => self.switch_language(&code).await,
            SlashCommand::Listen => self.toggle_listening(),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    /// Switches UI text and chat display language together.
    ///
    /// When the UI text cannot be translated, both stay on the previous
    /// language.
    async fn switch_language(&mut self, code: &str) {
        if let Err(e) = validate_language(code) {
            ui::print_error(&e.to_string());
            return;
        }

        let spinner = Spinner::new("Translating interface...");
        let outcome = self.translation.set_language(code).await;
        spinner.stop();

        match outcome {
            LanguageSwitch::Retained { error } => {
                ui::print_error(&format!(
                    "Could not switch to {code}: {error}. Staying on {}.",
                    self.translation.active_language()
                ));
            }
            switched => {
                debug!(?switched, "display language changed");
                self.controller
                    .set_display_language(self.translation.active_language());
                println!(
                    "{} Display language set to {}\n",
                    Style::success("✓"),
                    Style::value(code)
                );
            }
        }
    }

    fn toggle_listening(&mut self) {
        match self.voice.toggle() {
            Ok(true) => println!(
                "{} {}\n",
                Style::success("●"),
                Style::hint("Listening. Your next line is sent as a spoken transcript.")
            ),
            Ok(false) => println!("{}\n", Style::hint("Stopped listening.")),
            Err(e) => ui::print_error(&format!("Voice input unavailable: {e}")),
        }
    }

    /// Sends one message and prints what it added to the history.
    ///
    /// Returns `false` when Ctrl+C interrupted the round trip.
    async fn send_and_print(&mut self, message: &str) -> bool {
        let seen = self.controller.history_len();
        let (voice, controller) = (&mut self.voice, &self.controller);
        let send = async move {
            if voice.is_listening() {
                voice.deliver(controller, message).await
            } else {
                controller.send(message).await
            }
        };

        let spinner = Spinner::new("Waiting for the tutor...");
        let (result, interrupted) = until_interrupted(send, &self.cancel).await;
        spinner.stop();

        match result {
            Ok(SendOutcome::Ignored) => {}
            Ok(outcome) => {
                debug!(?outcome, "chat round trip finished");
                for entry in self.controller.history_since(seen) {
                    ui::print_message(&entry);
                }
                println!();
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
        !interrupted
    }
}
