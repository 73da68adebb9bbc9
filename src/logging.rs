//! Logging setup
//!
//! Installs a `tracing` fmt subscriber writing to stderr. Hosts embedding the
//! engine may install their own subscriber instead; `init` then does nothing.

use tracing::Level;

use crate::config::LogConfig;

/// Parse a level name; unknown names fall back to `info`
pub fn parse_level(name: &str) -> Level {
    match name.trim().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" | "warning" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Install the global subscriber. Returns false if one was already set.
pub fn init(config: &LogConfig) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(&config.level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
