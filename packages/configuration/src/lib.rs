//! Configuration data structures for the Torrust swarm tracker.
//!
//! The configuration is loaded with [`figment`] by merging, from lowest to
//! highest priority:
//!
//! 1. The defaults declared on each section (`#[serde(default = ...)]`).
//! 2. A TOML document: the content of the `TORRUST_TRACKER_CONFIG_TOML` env
//!    var if it is set, otherwise the file at `TORRUST_TRACKER_CONFIG_TOML_PATH`
//!    (or the default path given by the application).
//! 3. Environment variables with the `TORRUST_TRACKER_CONFIG_OVERRIDE_` prefix.
//!    Nested keys are separated with a double underscore, for example
//!    `TORRUST_TRACKER_CONFIG_OVERRIDE_CORE__ANNOUNCE_POLICY__INTERVAL=900`.
//!
//! The current version for configuration is [`v2`].
pub mod v2;

use std::env;
use std::sync::Arc;

use derive_more::Constructor;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use torrust_tracker_located_error::{DynError, LocatedError};

/// The maximum number of peers returned in one announce response.
pub const TORRENT_PEERS_LIMIT: usize = 50;

// Environment variables

/// The whole `tracker.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "TORRUST_TRACKER_CONFIG_TOML";

/// The `tracker.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_TRACKER_CONFIG_TOML_PATH";

/// Prefix for env vars that overwrite single configuration options.
const CONFIG_OVERRIDE_PREFIX: &str = "TORRUST_TRACKER_CONFIG_OVERRIDE_";

/// Path separator in env var names for nested values in configuration.
const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v2::Configuration;
pub type Core = v2::core::Core;
pub type HttpTracker = v2::http_tracker::HttpTracker;
pub type Logging = v2::logging::Logging;
pub type Network = v2::network::Network;
pub type Threshold = v2::logging::Threshold;
pub type Torrent = v2::torrent::Torrent;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Reads where the configuration has to be loaded from.
    ///
    /// Logging is not set up yet at this point, so the choice is printed to
    /// stdout.
    #[must_use]
    pub fn new(default_config_toml_path: String) -> Self {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable `{ENV_VAR_CONFIG_TOML}` ...");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Self {
            config_toml,
            config_toml_path,
        }
    }
}

/// Announce policy
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Constructor)]
pub struct AnnouncePolicy {
    /// Interval in seconds that the client should wait between sending regular
    /// announce requests to the tracker. It is returned as `interval` in every
    /// successful announce response.
    #[serde(default = "AnnouncePolicy::default_interval")]
    pub interval: u32,
}

impl Default for AnnouncePolicy {
    fn default() -> Self {
        Self {
            interval: Self::default_interval(),
        }
    }
}

impl AnnouncePolicy {
    fn default_interval() -> u32 {
        1800
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The merged configuration sources could not be parsed or extracted.
    #[error("Failed processing the configuration: {source}")]
    ConfigError {
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: (Arc::new(err) as DynError).into(),
        }
    }
}
