//! Torrust Swarm Tracker application.
//!
//! The tracker application has a global configuration for multiple jobs.
//! It's basically a container for other services.
//!
//! Jobs:
//!
//! - HTTP trackers: the user can enable multiple HTTP trackers on several ports.
//! - Swarm reaper: it removes the inactive peers from every swarm.
//!
//! [`start`] returns the [`Jobs`] so the caller can halt them on shutdown.
use std::sync::Arc;

use torrust_tracker_configuration::Configuration;
use tracing::{error, info};

use crate::bootstrap::jobs::{http_tracker, swarm_reaper, JobHandle};
use crate::servers::http::server::{self, RunningHttpServer};
use crate::{core, servers};

/// The jobs started by the application.
#[derive(Default)]
pub struct Jobs {
    pub http_trackers: Vec<RunningHttpServer>,
    pub swarm_reaper: Option<JobHandle>,
}

impl Jobs {
    /// Halts every job and waits for all of them to finish.
    pub async fn stop(self) {
        for http_tracker in self.http_trackers {
            let binding = http_tracker.state.binding;

            match http_tracker.stop().await {
                Ok(_stopped) => info!("HTTP tracker on {binding} stopped"),
                Err(err) => error!("HTTP tracker on {binding} did not stop cleanly: {err}"),
            }
        }

        if let Some(swarm_reaper) = self.swarm_reaper {
            if let Err(err) = swarm_reaper.halt().await {
                error!("swarm reaper did not stop cleanly: {err}");
            }
        }
    }
}

/// Starts every job enabled in the configuration.
///
/// # Errors
///
/// Will return an error if an HTTP tracker can not be started. The jobs that
/// were already started are halted first.
pub async fn start(config: &Configuration, tracker: Arc<core::Tracker>) -> Result<Jobs, server::Error> {
    let mut jobs = Jobs::default();

    // Start the HTTP trackers
    for http_tracker_config in &config.http_trackers {
        match http_tracker::start_job(http_tracker_config, tracker.clone(), servers::http::Version::V1).await {
            Ok(Some(server)) => jobs.http_trackers.push(server),
            Ok(None) => {}
            Err(err) => {
                jobs.stop().await;
                return Err(err);
            }
        }
    }

    // Start the job that removes the inactive peers, every interval
    jobs.swarm_reaper = swarm_reaper::start_job(&config.core, &tracker);

    Ok(jobs)
}
