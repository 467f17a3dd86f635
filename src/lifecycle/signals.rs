//! OS signal handling.
//!
//! An interrupt (Ctrl+C / SIGINT) is a clean stop request, not an error.

use crate::lifecycle::Shutdown;

/// Wait for an interrupt, then fire `shutdown`.
///
/// If the handler cannot be installed the stub keeps running; it can still
/// be killed by the OS.
pub async fn forward_interrupt(shutdown: Shutdown) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Interrupt received");
            shutdown.trigger();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install interrupt handler");
            std::future::pending::<()>().await;
        }
    }
}
