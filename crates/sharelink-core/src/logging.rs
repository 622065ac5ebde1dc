//! Tracing subscriber bootstrap for embedding applications.
//!
//! ShareLink itself only emits `tracing` events; installing a subscriber is
//! the embedder's call. `RUST_LOG` takes precedence over the configured
//! level.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::logging::LoggingConfig;

/// Install the global tracing subscriber according to `config`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left untouched.
pub fn init(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_ok(),
        _ => fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .is_ok(),
    }
}
