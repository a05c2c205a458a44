//! Primitive types for the Torrust swarm tracker.
//!
//! These are the plain data structures shared by the swarm registry, the
//! HTTP tracker and the configuration: torrent and peer identifiers, the
//! per-peer record kept in a swarm and the swarm statistics returned by
//! scrape requests.
use std::time::Duration;

pub mod announce_event;
pub mod info_hash;
pub mod peer;
pub mod swarm_metadata;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;

/// Byte counter reported by a peer (`uploaded`, `downloaded` and `left`).
pub type NumberOfBytes = u64;
