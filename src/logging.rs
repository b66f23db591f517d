//! Diagnostics setup. Report output owns stdout, so every `tracing` event
//! goes to stderr.

use crate::errors::{AppError, AppResult};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Pick the filter directive: explicit flag, then `RUST_LOG`, then config.
pub fn resolve_filter(cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    if let Some(level) = cli_level
        && let Ok(filter) = EnvFilter::try_new(normalize(level))
    {
        return filter;
    }

    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(normalize(config_level)))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Accept the common upper-case level names as well.
fn normalize(level: &str) -> String {
    match level.trim().to_uppercase().as_str() {
        "WARNING" => "warn".to_string(),
        "CRITICAL" => "error".to_string(),
        "TRACE" | "DEBUG" | "INFO" | "WARN" | "ERROR" | "OFF" => level.trim().to_lowercase(),
        _ => level.trim().to_string(),
    }
}

/// Install the global subscriber. Must be called once, before any command.
pub fn init(cli_level: Option<&str>, config_level: &str) -> AppResult<()> {
    let filter = resolve_filter(cli_level, config_level);

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
