//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (CLI positional argument)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → StubConfig (validated, immutable)
//!     → handed by value to HttpServer::new
//! ```
//!
//! Without a file, `StubConfig::default()` binds `127.0.0.1:8000`.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AccessLog, ListenerConfig, ObservabilityConfig, StubConfig, TimeoutConfig};
