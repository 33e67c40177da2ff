//! Tracing subscriber bootstrap
//!
//! Filter precedence: `CODONPROF_LOG`, then `RUST_LOG`, then the configured level.

use crate::config::LoggingConfig;
use crate::{CodonError, CodonResult};
use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`
pub const LOG_ENV_VAR: &str = "CODONPROF_LOG";

/// Build the filter the subscriber will use
pub fn build_filter(config: &LoggingConfig) -> CodonResult<EnvFilter> {
    if let Ok(directive) = std::env::var(LOG_ENV_VAR) {
        return parse_filter(&directive);
    }

    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_filter(&config.level),
    }
}

fn parse_filter(directive: &str) -> CodonResult<EnvFilter> {
    EnvFilter::try_new(directive).map_err(|e| {
        CodonError::Configuration(format!("Invalid log filter '{}': {}", directive, e))
    })
}

/// Install a global fmt subscriber. Returns `Ok(false)` if one was already installed.
pub fn init_logging(config: &LoggingConfig) -> CodonResult<bool> {
    let filter = build_filter(config)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.level, "logging initialized");
    }
    Ok(installed)
}
