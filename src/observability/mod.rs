//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs, http, lifecycle
//!     → tracing events (startup URL, upload diagnostics, stop)
//!     → logging.rs subscriber (EnvFilter + fmt)
//!     → stdout
//! ```
//!
//! Per-request access lines only exist when `access_log = "on"`.

pub mod logging;
