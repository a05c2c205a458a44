//! Setup for the main tracker application.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. Starting the jobs is done by
//! [`app::start`](crate::app::start).
//!
//! Setup steps:
//!
//! 1. Load the global application configuration.
//! 2. Initialize static variables.
//! 3. Initialize logging.
//! 4. Build the tracker and register the configured torrents.
use std::sync::Arc;

use thiserror::Error;
use torrust_tracker_clock::static_time;
use torrust_tracker_configuration::Configuration;
use torrust_tracker_located_error::{Located, LocatedError};
use tracing::info;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::services::tracker_factory;
use crate::core::Tracker;

/// Errors that stop the application before any job is started.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to load the configuration: {source}")]
    BadConfiguration {
        source: LocatedError<'static, torrust_tracker_configuration::Error>,
    },

    #[error("Unable to register the configured torrents: {source}")]
    BadTorrentRegistration {
        source: LocatedError<'static, torrust_tracker_swarm_registry::Error>,
    },
}

/// It loads the configuration from the environment and builds the main
/// domain [`Tracker`] struct.
///
/// # Errors
///
/// Will return an error if the configuration can not be loaded or a
/// configured torrent can not be registered.
pub fn setup() -> Result<(Configuration, Arc<Tracker>), Error> {
    let configuration = initialize_configuration().map_err(|err| Error::BadConfiguration {
        source: Located(err).into(),
    })?;

    let tracker = initialize_with_configuration(&configuration)?;

    Ok((configuration, tracker))
}

/// It initializes the application with the given configuration.
///
/// # Errors
///
/// Will return an error if the same info hash is configured twice.
pub fn initialize_with_configuration(configuration: &Configuration) -> Result<Arc<Tracker>, Error> {
    initialize_static();
    initialize_logging(configuration);

    let tracker = initialize_tracker(configuration)?;

    info!("Tracker id: {}", tracker.tracker_id());

    Ok(Arc::new(tracker))
}

/// It initializes the application static values.
pub fn initialize_static() {
    // Set the time of the tracker app starting
    lazy_static::initialize(&static_time::TIME_AT_APP_START);
}

/// It builds the domain tracker and registers the torrents listed in the
/// configuration.
///
/// # Errors
///
/// Will return an error if a configured torrent is already registered.
pub fn initialize_tracker(config: &Configuration) -> Result<Tracker, Error> {
    let tracker = tracker_factory(config);

    tracker
        .register_torrents(&config.torrents)
        .map_err(|err| Error::BadTorrentRegistration {
            source: Located(err).into(),
        })?;

    Ok(tracker)
}

/// It initializes the logging (`tracing-subscriber`) with the threshold
/// defined in the configuration.
pub fn initialize_logging(config: &Configuration) {
    bootstrap::logging::setup(config);
}
