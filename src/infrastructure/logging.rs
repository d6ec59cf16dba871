//! Tracing subscriber setup

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` wins, then the configured level.
/// An unparseable level falls back to `warn`.
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// machine-readable. Calling this twice is a no-op.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}
