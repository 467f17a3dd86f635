//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (one at a time)
//!     → server.rs (hyper HTTP/1 connection, Axum router)
//!     → upload.rs (POST /upload, or 404)
//!     → request.rs (Content-Length rule, truncating body read)
//!     → payload decode + diagnostic line
//!     → response.rs (fixed JSON body)
//!     → connection closed
//! ```

pub mod request;
pub mod response;
pub mod server;
pub mod upload;

pub use server::{AppState, HttpServer, ServerError};
