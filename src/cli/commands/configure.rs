//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{CustomType, Select};

use crate::backend::DEFAULT_TIMEOUT;
use crate::config::{ConfigFile, ConfigManager, DEFAULT_BACKEND, TutorConfig};
use crate::translation::{BASE_LANGUAGE, SUPPORTED_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

/// Prints the current defaults, or edits them interactively and saves.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_defaults(&config);
    if show {
        return Ok(());
    }

    let Some(tutor) = handle_prompt_cancellation(|| prompt_defaults(&config))? else {
        return Ok(());
    };
    config.tutor = tutor;
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );
    Ok(())
}

fn prompt_defaults(config: &ConfigFile) -> Result<TutorConfig> {
    let backend = select_backend(config)?;
    let language = select_language(config.tutor.language.as_deref())?;

    let current_timeout = config
        .tutor
        .timeout_secs
        .unwrap_or(DEFAULT_TIMEOUT.as_secs());
    let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(current_timeout)
        .with_validator(|secs: &u64| {
            Ok(if *secs == 0 {
                inquire::validator::Validation::Invalid("Must be at least 1".into())
            } else {
                inquire::validator::Validation::Valid
            })
        })
        .prompt()?;

    Ok(TutorConfig {
        backend: Some(backend),
        language: Some(language),
        timeout_secs: Some(timeout_secs),
        cache: config.tutor.cache,
    })
}

fn print_current_defaults(config: &ConfigFile) {
    let show =
        |value: Option<String>| value.map_or_else(|| Style::secondary("(not set)"), Style::value);

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}   {}",
        Style::label("backend"),
        show(config.tutor.backend.clone())
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        show(config.tutor.language.clone())
    );
    println!(
        "  {}   {}",
        Style::label("timeout"),
        show(config.tutor.timeout_secs.map(|s| format!("{s}s")))
    );
    println!(
        "  {}     {}",
        Style::label("cache"),
        show(config.tutor.cache.map(|c| c.to_string()))
    );
    println!();
}

fn select_backend(config: &ConfigFile) -> Result<String> {
    let names: Vec<String> = config.all_backends().into_keys().collect();
    let current = config.tutor.backend.as_deref().unwrap_or(DEFAULT_BACKEND);
    let start = names.iter().position(|n| n == current).unwrap_or(0);

    Ok(Select::new("Default backend:", names)
        .with_starting_cursor(start)
        .prompt()?)
}

fn select_language(current: Option<&str>) -> Result<String> {
    let options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name, native)| format!("{code} - {name} ({native})"))
        .collect();

    let current = current.unwrap_or(BASE_LANGUAGE);
    let start = SUPPORTED_LANGUAGES
        .iter()
        .position(|(code, _, _)| *code == current)
        .unwrap_or(0);

    let selection = Select::new("Default display language:", options)
        .with_starting_cursor(start)
        .prompt()?;

    Ok(selection
        .split(" - ")
        .next()
        .unwrap_or(&selection)
        .to_string())
}
