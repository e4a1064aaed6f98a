use anyhow::Result;
use clap::Parser;

use tutor_cli::cli::commands::{
    ConnectionOptions, account, backends, chat, configure, home, lessons, translate,
};
use tutor_cli::cli::{Args, Command};
use tutor_cli::logging;
use tutor_cli::output::{self, OutputConfig};
use tutor_cli::translation::{print_languages, validate_language};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    logging::init(args.verbose);

    let connection = ConnectionOptions {
        backend: args.backend,
        endpoint: args.endpoint,
        timeout_secs: args.timeout,
    };

    match args.command {
        Command::Home { lang } => {
            if let Some(ref code) = lang {
                validate_language(code)?;
            }
            home::run_home(&connection, lang).await?;
        }
        Command::Chat { lang } => {
            if let Some(ref code) = lang {
                validate_language(code)?;
            }
            chat::run_chat(chat::ChatOptions { connection, lang }).await?;
        }
        Command::Lessons { topic, lang } => {
            if let Some(ref code) = lang {
                validate_language(code)?;
            }
            let options = lessons::LessonOptions {
                connection,
                topic,
                lang,
            };
            lessons::run_lessons(options).await?;
        }
        Command::Translate {
            file,
            to,
            output,
            builtin,
            no_cache,
        } => {
            let options = translate::TranslateOptions {
                connection,
                file,
                to,
                output,
                builtin,
                no_cache,
            };
            translate::run_translate(options).await?;
        }
        Command::Login { email } => {
            account::run_login(&connection, &email).await?;
        }
        Command::Register {
            name,
            email,
            language,
            field,
        } => {
            let options = account::RegisterOptions {
                connection,
                name,
                email,
                language,
                field,
            };
            account::run_register(options).await?;
        }
        Command::Languages => print_languages(),
        Command::Backends { name } => backends::print_backends(name.as_deref())?,
        Command::Configure { show } => configure::run_configure(show)?,
    }

    Ok(())
}
