use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::{ConnectionOptions, http_backend, open_store};
use crate::dictionary::{TextDictionary, builtin};
use crate::input::DictionaryReader;
use crate::translation::{LanguageSwitch, TranslationSession, validate_language};
use crate::ui::{Spinner, Style, until_interrupted};
use crate::{fs, status};

pub struct TranslateOptions {
    pub connection: ConnectionOptions,
    pub file: Option<PathBuf>,
    pub to: String,
    pub output: Option<PathBuf>,
    pub builtin: bool,
    pub no_cache: bool,
}

/// Translates a whole dictionary in one batch request and prints it as JSON.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    validate_language(&options.to)?;

    let source = if options.builtin {
        builtin()
    } else {
        DictionaryReader::read(options.file.as_deref())?
    };

    let resolved = options.connection.resolve(None, options.no_cache)?;
    let backend = Arc::new(http_backend(&resolved));
    let cancel = backend.cancellation_token().clone();
    let mut session = TranslationSession::new(backend, source);
    if let Some(store) = open_store(resolved.cache) {
        session = session.with_store(store);
    }

    let translated = translate(&mut session, &options.to, &cancel).await?;
    let json = serde_json::to_string_pretty(translated.as_ref())
        .context("Failed to serialize translated dictionary")?;

    match &options.output {
        Some(path) => {
            fs::atomic_write(path, &format!("{json}\n"))?;
            status!(
                "{} Wrote {}",
                Style::success("✓"),
                Style::secondary(path.display())
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

async fn translate(
    session: &mut TranslationSession,
    to: &str,
    cancel: &CancellationToken,
) -> Result<Arc<TextDictionary>> {
    let spinner = Spinner::new("Translating...");
    let (outcome, _) = until_interrupted(session.set_language(to), cancel).await;
    spinner.stop();

    match outcome {
        LanguageSwitch::Retained { error } => {
            Err(anyhow::Error::new(error).context(format!("Failed to translate into '{to}'")))
        }
        LanguageSwitch::Base => {
            status!(
                "{}",
                Style::hint("Target is the base language; nothing to translate.")
            );
            Ok(session.active_dictionary())
        }
        LanguageSwitch::Cached => {
            status!("{}", Style::hint("Using cached translation."));
            Ok(session.active_dictionary())
        }
        LanguageSwitch::Fetched { leaves } => {
            status!("{} Translated {leaves} strings", Style::success("✓"));
            Ok(session.active_dictionary())
        }
    }
}
