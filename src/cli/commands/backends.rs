//! Backend listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigManager, DEFAULT_BACKEND};
use crate::ui::Style;

/// Prints configured backends, or the details of `specific_backend`.
pub fn print_backends(specific_backend: Option<&str>) -> Result<()> {
    let config = ConfigManager::new()?.load_or_default()?;
    let backends = config.all_backends();
    let default_backend = config.tutor.backend.as_deref().unwrap_or(DEFAULT_BACKEND);

    let marker = |name: &str| {
        if name == default_backend {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    };

    if let Some(name) = specific_backend {
        let Some(backend) = backends.get(name) else {
            bail!("Backend '{name}' not found");
        };

        println!("{}{}", Style::header(name), marker(name));
        println!(
            "  {}  {}",
            Style::label("endpoint"),
            Style::value(&backend.endpoint)
        );
        if backend.requires_api_key() {
            let state = if backend.get_api_key().is_some() {
                Style::success("(set)")
            } else {
                Style::warning("(not set)")
            };
            println!("  {}   {state}", Style::label("api_key"));
            if let Some(env_var) = &backend.api_key_env {
                println!("  {}   {}", Style::label("from env"), Style::code(env_var));
            }
        }
        return Ok(());
    }

    println!("{}", Style::header("Configured backends"));
    println!();
    for (name, backend) in &backends {
        println!("  {}{}", Style::value(name), marker(name));
        println!("    {}", Style::secondary(&backend.endpoint));
    }

    Ok(())
}
