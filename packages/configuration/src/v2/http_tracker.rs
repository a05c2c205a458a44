use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Configuration for each HTTP tracker.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct HttpTracker {
    /// Weather the HTTP tracker is enabled or not.
    #[serde(default = "HttpTracker::default_enabled")]
    pub enabled: bool,

    /// The address the tracker will bind to.
    /// The format is `ip:port`, for example `0.0.0.0:7070`. If you want to
    /// listen to all interfaces, use `0.0.0.0`. If you want the operating
    /// system to choose a random port, use port `0`.
    #[serde(default = "HttpTracker::default_bind_address")]
    pub bind_address: SocketAddr,

    /// Path of the announce endpoint. The scrape endpoint path is derived
    /// from it by replacing a leading `announce` in its last segment with
    /// `scrape` (`/announce` -> `/scrape`). When the last segment does not
    /// start with `announce` the tracker does not serve scrape requests.
    #[serde(default = "HttpTracker::default_announce_path")]
    pub announce_path: String,
}

impl Default for HttpTracker {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            bind_address: Self::default_bind_address(),
            announce_path: Self::default_announce_path(),
        }
    }
}

impl HttpTracker {
    fn default_enabled() -> bool {
        true
    }

    fn default_bind_address() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), 7070)
    }

    fn default_announce_path() -> String {
        "/announce".to_owned()
    }
}
