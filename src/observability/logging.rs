//! Structured logging.
//!
//! Uses `tracing` with a `fmt` layer. `RUST_LOG` wins when set; otherwise the
//! crate logs at the configured level and dependencies stay quiet unless the
//! access log is on.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AccessLog, ObservabilityConfig};

/// Filter directives derived from config.
pub fn default_directives(config: &ObservabilityConfig) -> String {
    let level = config.log_level.to_lowercase();
    match config.access_log {
        AccessLog::Off => format!("upload_stub={level}"),
        AccessLog::On => format!("upload_stub={level},tower_http=debug"),
    }
}

/// Install the global subscriber.
pub fn init(config: &ObservabilityConfig) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(config).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
