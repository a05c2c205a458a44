//! Application jobs launchers.
//!
//! The main application setup has only two main stages:
//!
//! 1. Setup the domain layer: the core tracker.
//! 2. Launch all the application services as concurrent jobs.
//!
//! This modules contains all the functions needed to start those jobs.
pub mod http_tracker;
pub mod swarm_reaper;

use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};

use crate::servers::signals::Halted;

/// This is the message that the "launcher" spawned task sends to the main
/// application process to notify the service was successfully started.
#[derive(Debug)]
pub struct Started {
    pub address: std::net::SocketAddr,
}

/// A background job and the channel used to halt it.
#[derive(Debug)]
pub struct JobHandle {
    halt: oneshot::Sender<Halted>,
    task: JoinHandle<()>,
}

impl JobHandle {
    #[must_use]
    pub fn new(halt: oneshot::Sender<Halted>, task: JoinHandle<()>) -> Self {
        Self { halt, task }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Asks the job to stop and waits for it.
    ///
    /// # Errors
    ///
    /// Will return an error if the job task panicked.
    pub async fn halt(self) -> Result<(), JoinError> {
        if self.halt.send(Halted::Normal).is_err() {
            tracing::debug!("the job had already finished");
        }

        self.task.await
    }
}
