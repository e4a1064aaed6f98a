//! # tutor - terminal front end for an AI Tamil tutor
//!
//! Talks to a tutor backend over HTTP: a conversational `/chat` endpoint,
//! a batch `/translate` endpoint, and account endpoints.
//!
//! ## Features
//!
//! - **Localized interface**: all interface text lives in one
//!   [`TextDictionary`](dictionary::TextDictionary) and is translated in a
//!   single batch request per language, cached in memory and in `SQLite`
//! - **Chat**: messages are exchanged in the base language and shown in the
//!   learner's display language
//! - **Lessons**: alphabet, basic words, grammar and vowel pronunciation,
//!   with glosses in the display language
//! - **Accounts**: login and registration
//!
//! ## Quick Start
//!
//! ```bash
//! # Chat with the interface in Tamil
//! tutor chat --lang ta
//!
//! # Browse the grammar lesson with French glosses
//! tutor lessons grammar --lang fr
//!
//! # Translate a dictionary document
//! tutor translate ui.json --to fr > ui.fr.json
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/tutor/config.toml`:
//!
//! ```toml
//! [tutor]
//! backend = "local"
//! language = "ta"
//!
//! [backends.local]
//! endpoint = "http://localhost:5000"
//! ```

/// Login and registration outcomes.
pub mod account;

/// HTTP client for the tutor backend and the traits it implements.
pub mod backend;

/// Persistent cache of translated dictionaries using `SQLite`.
pub mod cache;

/// Chat controller and the interactive REPL.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and backend settings.
pub mod config;

/// Interface text: the dictionary type, its flattening, and the built-in catalog.
pub mod dictionary;

pub mod error;

/// File system utilities.
pub mod fs;

/// Reading dictionary documents from files and stdin.
pub mod input;

/// Built-in Tamil lessons.
pub mod lessons;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Display language selection and the translation session.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;
