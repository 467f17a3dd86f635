//! Configuration validation.
//!
//! Serde handles syntax; this covers the semantic checks. All failures are
//! collected instead of stopping at the first one.

use thiserror::Error;

use crate::config::schema::StubConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("listener.host contains whitespace: {0:?}")]
    MalformedHost(String),

    #[error("timeouts.body_read_ms must be greater than zero")]
    ZeroBodyReadTimeout,

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a configuration, returning every problem found.
pub fn validate_config(config: &StubConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let host = &config.listener.host;
    if host.is_empty() {
        errors.push(ValidationError::EmptyHost);
    } else if host.chars().any(char::is_whitespace) {
        errors.push(ValidationError::MalformedHost(host.clone()));
    }

    if config.timeouts.body_read_ms == 0 {
        errors.push(ValidationError::ZeroBodyReadTimeout);
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
