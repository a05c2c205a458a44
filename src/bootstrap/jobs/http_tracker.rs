//! HTTP tracker job starter.
//!
//! The function [`http_tracker::start_job`](crate::bootstrap::jobs::http_tracker::start_job) starts a new HTTP tracker server.
//!
//! > **NOTICE**: the application can launch more than one HTTP tracker on different ports.
//! Refer to the [configuration documentation](https://docs.rs/torrust-tracker-configuration) for the configuration options.
//!
//! The job returns the running server, so the application can halt it on
//! shutdown.
use std::sync::Arc;

use torrust_tracker_configuration::HttpTracker;
use tracing::info;

use crate::core;
use crate::servers::http::server::{Error, HttpServer, Launcher, RunningHttpServer};
use crate::servers::http::{Version, HTTP_TRACKER_LOG_TARGET};

/// It starts the HTTP tracker when it is enabled.
///
/// # Errors
///
/// Will return an error if the server can not bind to the configured address.
pub async fn start_job(
    config: &HttpTracker,
    tracker: Arc<core::Tracker>,
    version: Version,
) -> Result<Option<RunningHttpServer>, Error> {
    if config.enabled {
        match version {
            Version::V1 => start_v1(config, tracker).await.map(Some),
        }
    } else {
        info!(target: HTTP_TRACKER_LOG_TARGET, "Note: Not loading Http Tracker Service, Not Enabled in Configuration.");
        Ok(None)
    }
}

async fn start_v1(config: &HttpTracker, tracker: Arc<core::Tracker>) -> Result<RunningHttpServer, Error> {
    HttpServer::new(Launcher::new(config.bind_address, config.announce_path.clone()))
        .start(tracker)
        .await
}
