//! Diagnostic logging.
//!
//! Diagnostics go through `tracing` to stderr so they never mix with
//! results on stdout. `TUTOR_LOG` takes an `EnvFilter` directive and wins
//! over `-v`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TUTOR_LOG";

/// Filter directive for a `-v` count.
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "tutor_cli=info,warn",
        2 => "tutor_cli=debug,info",
        _ => "trace",
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
