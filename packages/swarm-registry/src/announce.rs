//! Announce request and response data of the swarm registry.
use derive_more::Constructor;
use torrust_tracker_configuration::TORRENT_PEERS_LIMIT;
use torrust_tracker_primitives::announce_event::AnnounceEvent;
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::{peer, NumberOfBytes};

use crate::encoding::VerbosePeer;

/// A validated announce. The peer listen address travels apart because it
/// is resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceRequest {
    pub info_hash: InfoHash,
    pub peer_id: peer::Id,
    pub uploaded: NumberOfBytes,
    pub downloaded: NumberOfBytes,
    pub left: NumberOfBytes,
    /// Return the peers in the 6-byte compact form.
    pub compact: bool,
    /// Leave the `peer id` out of the verbose peer list.
    pub no_peer_id: bool,
    pub event: AnnounceEvent,
    /// Number of peers the client wants. Values out of `1..=50` mean 50.
    pub num_want: i64,
    /// The `trackerid` the client sent back, if any.
    pub tracker_id: Option<String>,
}

impl AnnounceRequest {
    /// A regular announce with no event and the default number of peers.
    #[must_use]
    pub fn new(info_hash: InfoHash, peer_id: peer::Id) -> Self {
        Self {
            info_hash,
            peer_id,
            uploaded: 0,
            downloaded: 0,
            left: 0,
            compact: false,
            no_peer_id: false,
            event: AnnounceEvent::None,
            num_want: 0,
            tracker_id: None,
        }
    }
}

/// The encoded peer list of an announce response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Peers {
    Compact(Vec<u8>),
    Verbose(Vec<VerbosePeer>),
}

impl Peers {
    #[must_use]
    pub fn empty(compact: bool) -> Self {
        if compact {
            Self::Compact(vec![])
        } else {
            Self::Verbose(vec![])
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Compact(bytes) => bytes.len() / crate::encoding::COMPACT_PEER_LEN,
            Self::Verbose(peers) => peers.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What a swarm answers to an announce. The interval and the tracker id are
/// added by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct AnnounceData {
    /// Peers in the swarm with nothing left to download.
    pub complete: u64,
    /// The other peers in the swarm.
    pub incomplete: u64,
    pub peers: Peers,
}

/// The number of peers to return: the requested number, or the limit when
/// it is not positive or above the limit, but never more than `available`.
#[must_use]
pub fn effective_num_want(requested: i64, available: usize) -> usize {
    let want = match usize::try_from(requested) {
        Ok(want) if want > 0 && want <= TORRENT_PEERS_LIMIT => want,
        _ => TORRENT_PEERS_LIMIT,
    };

    want.min(available)
}
