//! Subcommand implementations.

use anyhow::Result;
use std::sync::Arc;

use crate::backend::HttpBackend;
use crate::cache::DictionaryCache;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::dictionary::{TextDictionary, builtin};
use crate::notice;
use crate::translation::{LanguageSwitch, TranslationSession};
use crate::ui::{Spinner, Style, until_interrupted};

/// Login and registration handlers.
pub mod account;

/// Backend listing handler.
pub mod backends;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Home page handler.
pub mod home;

/// Lesson browser handler.
pub mod lessons;

/// Dictionary translation handler.
pub mod translate;

/// Backend selection flags shared by every networked command.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    pub backend: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConnectionOptions {
    /// Merges these flags with the config file.
    pub fn resolve(&self, language: Option<String>, no_cache: bool) -> Result<ResolvedConfig> {
        let file = ConfigManager::new()?.load_or_default()?;
        let options = ResolveOptions {
            backend: self.backend.clone(),
            endpoint: self.endpoint.clone(),
            language,
            timeout_secs: self.timeout_secs,
            no_cache,
        };
        resolve_config(&options, &file)
    }
}

fn http_backend(config: &ResolvedConfig) -> HttpBackend {
    HttpBackend::new(
        config.endpoint.clone(),
        config.api_key.clone(),
        config.timeout,
    )
}

/// Opens the persistent dictionary cache, or runs without one.
fn open_store(enabled: bool) -> Option<DictionaryCache> {
    if !enabled {
        return None;
    }
    match DictionaryCache::new() {
        Ok(store) => Some(store),
        Err(e) => {
            notice!("{} cache disabled: {e:#}", Style::warning("Warning:"));
            None
        }
    }
}

/// Returns the built-in interface text in the configured language.
///
/// Shows the English text when the translation cannot be fetched.
async fn interface_text(config: &ResolvedConfig) -> Arc<TextDictionary> {
    let backend = Arc::new(http_backend(config));
    let cancel = backend.cancellation_token().clone();
    let mut session = TranslationSession::new(backend, builtin());
    if let Some(store) = open_store(config.cache) {
        session = session.with_store(store);
    }

    let spinner = Spinner::new("Translating interface...");
    let (outcome, _) = until_interrupted(session.set_language(&config.language), &cancel).await;
    spinner.stop();

    if let LanguageSwitch::Retained { error } = outcome {
        notice!(
            "{} showing English text: {error}",
            Style::warning("Warning:")
        );
    }
    session.active_dictionary()
}
