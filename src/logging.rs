//! Logging utilities wrapping `tracing` initialisation

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber with the given default level.
///
/// The `QRSMITH_LOG` environment variable takes precedence over
/// `default_level`. Subsequent calls are ignored to avoid reinitialisation
/// panics.
pub fn init(default_level: &str) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        // Already configured by tests or caller; nothing to do.
        return Ok(());
    }

    let level = std::env::var("QRSMITH_LOG").unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(level.as_str())
        .map_err(|e| Error::Config(format!("Invalid log level '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {e}")))
}
