//! HTTP server setup and the sequential serve loop.
//!
//! # Responsibilities
//! - Build the Axum router (every request goes to `upload::dispatch`)
//! - Apply the access-log policy
//! - Accept one connection at a time and serve it to completion
//! - Stop on the shutdown signal without draining

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{AccessLog, StubConfig};
use crate::http::upload::dispatch;
use crate::lifecycle::ShutdownSignal;

/// Error type for the serve loop.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("listener IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub body_read_timeout: Duration,
}

/// The upload listener.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: StubConfig) -> Self {
        let state = AppState {
            body_read_timeout: Duration::from_millis(config.timeouts.body_read_ms),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    fn build_router(config: &StubConfig, state: AppState) -> Router {
        let router = Router::new().fallback(dispatch).with_state(state);

        match config.observability.access_log {
            AccessLog::Off => router,
            AccessLog::On => router.layer(TraceLayer::new_for_http()),
        }
    }

    /// Serve connections from `listener` until `shutdown` fires.
    ///
    /// Connections are handled strictly one after another with keep-alive
    /// disabled. A shutdown aborts whatever connection is in flight.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownSignal,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(url = %upload_url(addr), "Starting upload stub");

        loop {
            let (stream, peer) = tokio::select! {
                biased;
                _ = shutdown.fired() => break,
                accepted = listener.accept() => match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to accept connection");
                        continue;
                    }
                },
            };

            let connection = http1::Builder::new()
                .keep_alive(false)
                .half_close(true)
                .serve_connection(
                    TokioIo::new(stream),
                    TowerToHyperService::new(self.router.clone()),
                );

            tokio::select! {
                biased;
                _ = shutdown.fired() => break,
                result = connection => {
                    if let Err(e) = result {
                        tracing::debug!(peer = %peer, error = %e, "Connection ended with error");
                    }
                }
            }
        }

        drop(listener);
        tracing::info!("Server stopped");
        Ok(())
    }
}

/// URL of the upload route on a bound address.
pub fn upload_url(addr: SocketAddr) -> String {
    format!("http://{addr}/upload")
}
