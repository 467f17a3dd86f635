//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port)
//!     → listener.rs (bind)
//!     → Hand off TcpListener to http::server
//! ```

pub mod listener;

pub use listener::{bind, ListenerError};
