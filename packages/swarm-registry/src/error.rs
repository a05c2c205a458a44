//! Errors returned by the swarm registry.
//!
//! None of them is fatal: a failed operation leaves the registry as it was
//! (or, for compact encoding, discards the whole response) and the caller
//! turns the error into a `failure reason` for the client.
use std::panic::Location;

use thiserror::Error;
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::peer::PeerKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The client sent a `trackerid` that is not the id of this tracker.
    #[error("incorrect tracker id: {tracker_id:?}, {location}")]
    InvalidTrackerId {
        tracker_id: String,
        location: &'static Location<'static>,
    },

    /// Explicit registration of an info hash that already has a swarm.
    #[error("already have a torrent {name:?} with info hash {info_hash}, {location}")]
    AlreadyExists {
        info_hash: InfoHash,
        name: String,
        location: &'static Location<'static>,
    },

    /// A compact peer list was requested but a selected peer has no IPv4 address.
    #[error("can't write a compact peer for the non-IPv4 peer {peer_key}, {location}")]
    NonIpv4CompactEncoding {
        peer_key: PeerKey,
        location: &'static Location<'static>,
    },
}
