//! Upload Stub
//!
//! A single-route HTTP listener for exercising client upload code paths
//! without a real backend.
//!
//! ```text
//!     Client ──▶ net::listener ──▶ http::server ──▶ POST /upload ──▶ payload::decode
//!                                       │                                 │
//!                                       │                           log diagnostic
//!                                       ▼                                 │
//!     Client ◀───────────── 404 {"error": "not found"}    200 {"status": "ok"}
//! ```
//!
//! Connections are served one at a time until Ctrl+C.

use std::path::PathBuf;

use clap::Parser;

use upload_stub::config::{load_config, StubConfig};
use upload_stub::lifecycle::{signals, Shutdown};
use upload_stub::{net, observability, HttpServer};

#[derive(Parser)]
#[command(name = "upload-stub")]
#[command(about = "Development stub that acknowledges JSON uploads", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => StubConfig::default(),
    };

    observability::logging::init(&config.observability);

    tracing::debug!(
        bind_address = %config.listener.bind_address(),
        body_read_ms = config.timeouts.body_read_ms,
        access_log = ?config.observability.access_log,
        "Configuration loaded"
    );

    let listener = net::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.signal();
    tokio::spawn(signals::forward_interrupt(shutdown));

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    Ok(())
}
