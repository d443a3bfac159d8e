//! Diagnostics setup for kickoff
//! Writes tracing output to stderr so stdout stays reserved for results

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags
pub const LOG_ENV: &str = "KICKOFF_LOG";

/// Default filter for a given `-v` count
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber
///
/// Later calls are ignored, so tests and embedders may call this freely.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("kickoff={}", level_for(verbosity))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
