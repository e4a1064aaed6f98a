//! Chat mode UI components.
//!
//! Visible text comes from the active dictionary so the chat screen follows
//! the learner's display language.

use crate::chat::message::{ChatMessage, Sender};
use crate::dictionary::TextDictionary;
use crate::translation::language_name;
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(text: &TextDictionary) {
    println!(
        "{} {} - {}",
        Style::header("tutor"),
        Style::version(format!("v{VERSION}")),
        text.text_or("chat_title", "Interactive Tamil Chat")
    );
    println!();
}

pub fn print_goodbye(text: &TextDictionary) {
    println!(
        "{}",
        Style::success(text.text_or("chat_goodbye", "Goodbye!"))
    );
}

pub fn print_message(message: &ChatMessage) {
    let speaker = match message.sender {
        Sender::User => Style::user("you"),
        Sender::Bot => Style::bot("tutor"),
    };
    println!("{speaker} {}", message.display_text());
}

pub fn print_history(history: &[ChatMessage]) {
    if history.is_empty() {
        println!("{}", Style::hint("No messages yet."));
        println!();
        return;
    }

    for message in history {
        print_message(message);
    }
    println!();
}

pub fn print_config(config: &SessionConfig, display_language: &str, listening: bool) {
    let language = language_name(display_language).map_or_else(
        || display_language.to_string(),
        |name| format!("{display_language} ({name})"),
    );

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}    {}",
        Style::label("backend"),
        Style::value(&config.backend_name)
    );
    println!(
        "  {}   {}",
        Style::label("language"),
        Style::value(language)
    );
    println!(
        "  {}  {}",
        Style::label("listening"),
        Style::value(if listening { "on" } else { "off" })
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/lang <code>", "Switch display language (e.g. /lang ta)"),
        ("/listen", "Toggle voice input; the next line is sent as a transcript"),
        ("/history", "Show the conversation so far"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (command, description) in commands {
        println!(
            "  {}  {}",
            Style::command(format!("{command:<12}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
