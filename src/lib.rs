//! Upload Stub Library
//!
//! A development stand-in for an upload backend: `POST /upload` accepts any
//! body, logs it as JSON (or `{"raw": ...}`), and answers `{"status": "ok"}`.
//! Everything else is a JSON 404.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod payload;

pub use config::StubConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use payload::Payload;
