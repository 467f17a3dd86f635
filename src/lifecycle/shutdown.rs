//! Stop signal for the serve loop.
//!
//! `Shutdown` is held by whoever may stop the stub (the interrupt task, or a
//! test); the serve loop holds the matching `ShutdownSignal`. The flag is
//! level-triggered: a signal taken after `trigger` still fires.

use tokio::sync::watch;

/// Owning side of the stop flag.
#[derive(Debug)]
pub struct Shutdown {
    stopped: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (stopped, _) = watch::channel(false);
        Self { stopped }
    }

    /// A signal for the serve loop to wait on.
    pub fn signal(&self) -> ShutdownSignal {
        ShutdownSignal {
            stopped: self.stopped.subscribe(),
        }
    }

    /// Ask the serve loop to stop.
    pub fn trigger(&self) {
        self.stopped.send_replace(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Waiting side of the stop flag.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    stopped: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Resolves once `trigger` has been called, or once the owning
    /// `Shutdown` is gone and nothing can stop the loop any more.
    pub async fn fired(&mut self) {
        let _ = self.stopped.wait_for(|stopped| *stopped).await;
    }
}
