//! Version `2` of the configuration.
//!
//! Default configuration:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core]
//! inactive_peer_cleanup_interval = 1800
//!
//! [core.announce_policy]
//! interval = 1800
//!
//! [core.net]
//! on_reverse_proxy = false
//!
//! [[http_trackers]]
//! enabled = true
//! bind_address = "0.0.0.0:7070"
//! announce_path = "/announce"
//! ```
//!
//! Torrents can be registered at startup with their display name:
//!
//! ```toml
//! [[torrents]]
//! info_hash = "9c38422213e30bff212b30c360d26f9a02136422"
//! name = "ubuntu.iso"
//! ```
pub mod core;
pub mod http_tracker;
pub mod logging;
pub mod network;
pub mod torrent;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::http_tracker::HttpTracker;
use self::logging::Logging;
use self::torrent::Torrent;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the tracker.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default = "Configuration::default_logging")]
    pub logging: Logging,

    /// Core configuration.
    #[serde(default = "Configuration::default_core")]
    pub core: Core,

    /// The list of HTTP trackers the tracker is running. Each HTTP tracker
    /// represents a HTTP server that the tracker is running and it has its own
    /// configuration.
    #[serde(default = "Configuration::default_http_trackers")]
    pub http_trackers: Vec<HttpTracker>,

    /// Torrents registered with a name at startup.
    #[serde(default = "Configuration::default_torrents")]
    pub torrents: Vec<Torrent>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            logging: Self::default_logging(),
            core: Self::default_core(),
            http_trackers: Self::default_http_trackers(),
            torrents: Self::default_torrents(),
        }
    }
}

impl Configuration {
    fn default_logging() -> Logging {
        Logging::default()
    }

    fn default_core() -> Core {
        Core::default()
    }

    fn default_http_trackers() -> Vec<HttpTracker> {
        vec![HttpTracker::default()]
    }

    fn default_torrents() -> Vec<Torrent> {
        vec![]
    }

    /// Loads the configuration from the `Info` struct.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the TOML document or the env var overrides
    /// contain invalid values.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::new().merge(Toml::string(config_toml))
        } else {
            Figment::new().merge(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration cannot be encoded. All the sections
    /// are plain tables so this does not happen.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }
}
