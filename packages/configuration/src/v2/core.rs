use serde::{Deserialize, Serialize};

use super::network::Network;
use crate::AnnouncePolicy;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Core {
    // Announce policy configuration.
    #[serde(default = "Core::default_announce_policy")]
    pub announce_policy: AnnouncePolicy,

    /// Interval in seconds that the reaper job will run to remove inactive
    /// peers from the swarms. A peer that has not announced for twice this
    /// interval is removed.
    #[serde(default = "Core::default_inactive_peer_cleanup_interval")]
    pub inactive_peer_cleanup_interval: u64,

    // Network configuration.
    #[serde(default = "Core::default_network")]
    pub net: Network,

    /// Identifier returned to clients as `tracker id`. When it is not set (or
    /// empty) a random 20 hex char id is generated every time the tracker
    /// starts.
    #[serde(default = "Core::default_tracker_id")]
    pub tracker_id: Option<String>,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            announce_policy: Self::default_announce_policy(),
            inactive_peer_cleanup_interval: Self::default_inactive_peer_cleanup_interval(),
            net: Self::default_network(),
            tracker_id: Self::default_tracker_id(),
        }
    }
}

impl Core {
    fn default_announce_policy() -> AnnouncePolicy {
        AnnouncePolicy::default()
    }

    fn default_inactive_peer_cleanup_interval() -> u64 {
        1800
    }

    fn default_network() -> Network {
        Network::default()
    }

    fn default_tracker_id() -> Option<String> {
        None
    }
}
