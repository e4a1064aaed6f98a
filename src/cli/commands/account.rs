use anyhow::Result;
use inquire::Password;

use super::{ConnectionOptions, http_backend};
use crate::account::{self, AccountOutcome};
use crate::backend::{LearnerField, RegisterForm};
use crate::ui::{Spinner, Style, handle_prompt_cancellation};

pub struct RegisterOptions {
    pub connection: ConnectionOptions,
    pub name: String,
    pub email: String,
    pub language: String,
    pub field: LearnerField,
}

pub async fn run_login(connection: &ConnectionOptions, email: &str) -> Result<()> {
    let resolved = connection.resolve(None, true)?;

    let Some(password) = handle_prompt_cancellation(|| {
        Ok(Password::new("Password:").without_confirmation().prompt()?)
    })?
    else {
        return Ok(());
    };

    let backend = http_backend(&resolved);
    let spinner = Spinner::new("Logging in...");
    let outcome = account::login(&backend, email, &password).await;
    spinner.stop();

    print_outcome(&outcome);
    if let AccountOutcome::LoggedIn(user) = &outcome
        && let Some(name) = &user.name
    {
        println!("Welcome back, {}!", Style::value(name));
    }
    Ok(())
}

pub async fn run_register(options: RegisterOptions) -> Result<()> {
    let resolved = options.connection.resolve(None, true)?;

    let Some(password) = handle_prompt_cancellation(|| Ok(Password::new("Password:").prompt()?))?
    else {
        return Ok(());
    };

    let form = RegisterForm {
        name: options.name,
        email: options.email,
        password,
        language: options.language,
        field: options.field,
    };

    let backend = http_backend(&resolved);
    let spinner = Spinner::new("Creating account...");
    let outcome = account::register(&backend, &form).await;
    spinner.stop();

    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &AccountOutcome) {
    if outcome.is_success() {
        println!("{} {outcome}", Style::success("✓"));
    } else {
        eprintln!("{} {outcome}", Style::error("Error:"));
    }
}
