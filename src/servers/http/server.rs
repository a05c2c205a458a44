//! Module to handle the HTTP server instances.
//!
//! An [`HttpServer`] is either [`Stopped`] or [`Running`]. Starting it binds
//! the socket and spawns the server task, stopping it sends the halt message
//! and waits for the open connections to finish.
//!
//! ```text
//! HttpServer<Stopped> --start()--> HttpServer<Running> --stop()--> HttpServer<Stopped>
//! ```
use std::net::SocketAddr;
use std::sync::Arc;

use derive_more::Constructor;
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};

use super::v1::routes::router;
use super::HTTP_TRACKER_LOG_TARGET;
use crate::bootstrap::jobs::Started;
use crate::core::Tracker;
use crate::servers::logging::STARTED_ON;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Error that can occur when starting or stopping the HTTP server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to bind to socket: {addr}, with error: {err}")]
    UnableToBindToSocket { addr: SocketAddr, err: Arc<std::io::Error> },
    #[error("Failed to get Local Address from Socket: {err:?}")]
    UnableToGetLocalAddress { err: Arc<std::io::Error> },
    #[error("Failed to serve service: {err:?}")]
    UnableToServe { err: Arc<std::io::Error> },
    #[error("Failed to receive started message: {err:?}")]
    UnableToReceiveStartedMessage { err: oneshot::error::RecvError },
    #[error("Failed to join task when stopping: {err:?}")]
    UnableToJoinStoppingService { err: Arc<JoinError> },
}

/// Binds the socket and serves the HTTP tracker routes on it.
#[derive(Constructor, Clone, Debug)]
pub struct Launcher {
    pub bind_to: SocketAddr,
    pub announce_path: String,
}

impl Launcher {
    /// Serves until the halt message arrives. The bound address is sent
    /// through `tx_start` once the socket is open.
    async fn run_with_graceful_shutdown(
        &self,
        tracker: Arc<Tracker>,
        tx_start: oneshot::Sender<Started>,
        rx_halt: oneshot::Receiver<Halted>,
    ) -> Result<(), Error> {
        let listener = std::net::TcpListener::bind(self.bind_to).map_err(|e| Error::UnableToBindToSocket {
            addr: self.bind_to,
            err: e.into(),
        })?;

        listener
            .set_nonblocking(true)
            .map_err(|e| Error::UnableToBindToSocket {
                addr: self.bind_to,
                err: e.into(),
            })?;

        let address = listener
            .local_addr()
            .map_err(|e| Error::UnableToGetLocalAddress { err: e.into() })?;

        let handle = axum_server::Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down HTTP server on socket address: {address}"),
        ));

        let app = router(tracker, &self.announce_path, &address);

        let running = axum_server::from_tcp(listener)
            .handle(handle)
            .serve(app.into_make_service_with_connect_info::<SocketAddr>());

        tracing::info!(target: HTTP_TRACKER_LOG_TARGET, "{STARTED_ON}: http://{address}");

        if tx_start.send(Started { address }).is_err() {
            tracing::warn!(target: HTTP_TRACKER_LOG_TARGET, %address, "nobody is waiting for the started message");
        }

        running.await.map_err(|e| Error::UnableToServe { err: e.into() })
    }
}

#[allow(clippy::module_name_repetitions)]
pub type StoppedHttpServer = HttpServer<Stopped>;

#[allow(clippy::module_name_repetitions)]
pub type RunningHttpServer = HttpServer<Running>;

#[allow(clippy::module_name_repetitions)]
pub struct HttpServer<S> {
    pub state: S,
}

pub struct Stopped {
    launcher: Launcher,
}

pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: oneshot::Sender<Halted>,
    pub task: JoinHandle<(Launcher, Result<(), Error>)>,
}

impl HttpServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// Starts the server and waits until it is listening.
    ///
    /// # Errors
    ///
    /// Will return an error if the socket can not be bound.
    pub async fn start(self, tracker: Arc<Tracker>) -> Result<HttpServer<Running>, Error> {
        let (tx_start, rx_start) = oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            tracing::debug!(target: HTTP_TRACKER_LOG_TARGET, bind_to = %launcher.bind_to, "starting");

            let result = launcher.run_with_graceful_shutdown(tracker, tx_start, rx_halt).await;

            tracing::debug!(target: HTTP_TRACKER_LOG_TARGET, bind_to = %launcher.bind_to, "stopped");

            (launcher, result)
        });

        let binding = match rx_start.await {
            Ok(started) => started.address,
            Err(err) => {
                let (_launcher, result) = task
                    .await
                    .map_err(|err| Error::UnableToJoinStoppingService { err: err.into() })?;

                return Err(match result {
                    Err(launch_error) => launch_error,
                    Ok(()) => Error::UnableToReceiveStartedMessage { err },
                });
            }
        };

        Ok(HttpServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl HttpServer<Running> {
    /// Sends the halt message and waits for the server to finish.
    ///
    /// # Errors
    ///
    /// Will return an error if the server task panicked, or if it failed
    /// while serving.
    pub async fn stop(self) -> Result<HttpServer<Stopped>, Error> {
        if self.state.halt_task.send(Halted::Normal).is_err() {
            tracing::debug!(target: HTTP_TRACKER_LOG_TARGET, binding = %self.state.binding, "already halted by the global shutdown signal");
        }

        let (launcher, result) = self
            .state
            .task
            .await
            .map_err(|err| Error::UnableToJoinStoppingService { err: err.into() })?;

        result?;

        Ok(HttpServer {
            state: Stopped { launcher },
        })
    }
}
