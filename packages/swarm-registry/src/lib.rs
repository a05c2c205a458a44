//! The swarm-state engine of the tracker.
//!
//! A [`SwarmRegistry`] owns one [`Swarm`] per info hash. Every operation
//! (`process_announce`, `scrape`, `register_swarm`, `unregister_swarm` and
//! `reap`) runs under one registry-wide mutex held for the whole operation,
//! so each of them is atomic with respect to the others. Nothing inside the
//! critical section blocks or awaits, and the [`notice`]s to log are written
//! once the lock is released.
//!
//! ```text
//! SwarmRegistry ── Mutex<BTreeMap<InfoHash, Swarm>>
//!                                           │
//!                                   Swarm { name, completed, PeerList }
//!                                                                │
//!                                        HashMap<PeerKey, PeerRecord>
//! ```
//!
//! An announce goes through these steps inside [`Swarm::announce`]:
//!
//! 1. The peer slot is looked up by its listen address. A record whose peer
//!    id differs from the announced one is replaced.
//! 2. `last_seen` and the byte counters are overwritten.
//! 3. The event is applied: `completed` increments the swarm counter,
//!    `stopped` removes the peer and empties its peer list.
//! 4. Up to `numwant` peers (50 at most) other than the requester are picked
//!    with [`selector::pick`] and encoded with [`encoding`].
pub mod announce;
pub mod encoding;
pub mod error;
pub mod notice;
pub mod peer_list;
pub mod registry;
pub mod scrape;
pub mod selector;
pub mod swarm;
pub mod tracker_id;

pub use announce::{AnnounceData, AnnounceRequest, Peers};
pub use error::Error;
pub use registry::SwarmRegistry;
pub use scrape::ScrapeData;
pub use swarm::Swarm;
pub use tracker_id::TrackerId;

pub(crate) const SWARM_REGISTRY_LOG_TARGET: &str = "SWARM REGISTRY";
