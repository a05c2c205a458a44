//! Changes to the swarm state worth a log line.
//!
//! The swarms collect them while the registry lock is held and the registry
//! logs them once the lock is released, so writing to the log never happens
//! inside the critical section.
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::peer::{self, PeerKey};

use crate::SWARM_REGISTRY_LOG_TARGET;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SwarmRegistered { info_hash: InfoHash, name: String },
    SwarmUnregistered { info_hash: InfoHash },
    /// The first announce for an unknown info hash created its swarm.
    SwarmCreated { info_hash: InfoHash },
    /// A peer announced from a known listen address with another peer id.
    PeerReplaced { peer_key: PeerKey, peer_id: peer::Id },
    UnrecognizedEvent { peer_key: PeerKey, event: String },
    PeerReaped { peer_key: PeerKey },
    SwarmReaped { info_hash: InfoHash, removed: usize },
}

impl Notice {
    pub fn log(&self) {
        match self {
            Notice::SwarmRegistered { info_hash, name } => {
                tracing::debug!(target: SWARM_REGISTRY_LOG_TARGET, %info_hash, name = name.as_str(), "swarm registered");
            }
            Notice::SwarmUnregistered { info_hash } => {
                tracing::debug!(target: SWARM_REGISTRY_LOG_TARGET, %info_hash, "swarm unregistered");
            }
            Notice::SwarmCreated { info_hash } => {
                tracing::debug!(target: SWARM_REGISTRY_LOG_TARGET, %info_hash, "swarm created on first announce");
            }
            Notice::PeerReplaced { peer_key, peer_id } => {
                tracing::debug!(target: SWARM_REGISTRY_LOG_TARGET, %peer_key, %peer_id, "peer id changed, replacing peer");
            }
            Notice::UnrecognizedEvent { peer_key, event } => {
                tracing::warn!(target: SWARM_REGISTRY_LOG_TARGET, %peer_key, %event, "unrecognized announce event");
            }
            Notice::PeerReaped { peer_key } => {
                tracing::debug!(target: SWARM_REGISTRY_LOG_TARGET, %peer_key, "reaped inactive peer");
            }
            Notice::SwarmReaped { info_hash, removed } => {
                tracing::debug!(target: SWARM_REGISTRY_LOG_TARGET, %info_hash, removed, "inactive peers reaped");
            }
        }
    }
}

pub fn log_all(notices: &[Notice]) {
    notices.iter().for_each(Notice::log);
}
