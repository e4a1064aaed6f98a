use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::backend::LearnerField;
use crate::lessons::Topic;

#[derive(Parser, Debug)]
#[command(name = "tutor")]
#[command(about = "Terminal front end for an AI Tamil tutor")]
#[command(version)]
pub struct Args {
    /// Backend name from the config file
    #[arg(short = 'b', long, global = true)]
    pub backend: Option<String>,

    /// Backend URL (overrides the configured endpoint)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the tutor's home page
    Home {
        /// Display language code (e.g., ta, fr)
        #[arg(short = 'l', long = "lang")]
        lang: Option<String>,
    },
    /// Chat with the tutor
    Chat {
        /// Display language code (e.g., ta, fr)
        #[arg(short = 'l', long = "lang")]
        lang: Option<String>,
    },
    /// Browse the built-in Tamil lessons
    Lessons {
        /// Lesson to show (lists all lessons if omitted)
        #[arg(value_enum)]
        topic: Option<Topic>,

        /// Language for headings and glosses
        #[arg(short = 'l', long = "lang")]
        lang: Option<String>,
    },
    /// Translate a text dictionary (JSON) in one batch request
    Translate {
        /// Dictionary file (reads from stdin if not provided)
        file: Option<PathBuf>,

        /// Target language code
        #[arg(short = 't', long = "to")]
        to: String,

        /// Write the result to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Translate the built-in interface text instead of FILE
        #[arg(long, conflicts_with = "file")]
        builtin: bool,

        /// Disable cache
        #[arg(short = 'n', long)]
        no_cache: bool,
    },
    /// Log in to the tutor backend
    Login {
        #[arg(short = 'e', long)]
        email: String,
    },
    /// Create a learner account
    Register {
        #[arg(long)]
        name: String,

        #[arg(short = 'e', long)]
        email: String,

        /// Preferred language (free text, e.g. "Tamil")
        #[arg(long, default_value = "Tamil")]
        language: String,

        #[arg(long, value_enum, default_value = "tamil-learner")]
        field: LearnerField,
    },
    /// List selectable display languages
    Languages,
    /// List configured backends
    Backends {
        /// Show details for one backend
        name: Option<String>,
    },
    /// Edit default settings
    Configure {
        /// Show current defaults without editing
        #[arg(long)]
        show: bool,
    },
}
