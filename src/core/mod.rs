//! The core `tracker` module contains the generic `BitTorrent` tracker logic which is independent of the delivery layer.
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!     HTTP tracker |> Core tracker |> Swarm registry
//! ```
//!
//! The [`Tracker`] wraps a [`SwarmRegistry`] and adds what the delivery layer
//! needs from the configuration:
//!
//! - The announce policy: the `interval` returned in every announce response.
//! - The tracker id returned as `tracker id`.
//! - Whether the tracker runs behind a reverse proxy, which decides where the
//!   client IP comes from.
//! - The reaping policy: a peer that has not announced for twice the
//!   `inactive_peer_cleanup_interval` is removed from its swarm.
//!
//! The tracker reads the time from the application clock, so the swarm
//! registry never has to.
//!
//! # Announce request
//!
//! ```rust,no_run
//! use std::net::SocketAddr;
//!
//! use torrust_swarm_tracker::core::services::tracker_factory;
//! use torrust_tracker_configuration::Configuration;
//! use torrust_tracker_primitives::info_hash::InfoHash;
//! use torrust_tracker_primitives::peer;
//! use torrust_tracker_swarm_registry::AnnounceRequest;
//!
//! let tracker = tracker_factory(&Configuration::default());
//!
//! let info_hash: InfoHash = "3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0".parse().unwrap();
//! let mut request = AnnounceRequest::new(info_hash, peer::Id::from("-qB00000000000000001"));
//! request.left = 1000;
//!
//! let listen_address: SocketAddr = "126.0.0.1:6881".parse().unwrap();
//!
//! let announce_data = tracker.announce(&listen_address, &request).unwrap();
//!
//! assert_eq!(announce_data.incomplete, 1);
//! ```
//!
//! # Scrape request
//!
//! An empty list of info hashes returns the metadata of all the swarms. The
//! unknown info hashes are left out of the response.
pub mod services;

use std::net::SocketAddr;
use std::time::Duration;

use torrust_tracker_clock::clock::Time;
use torrust_tracker_configuration::{AnnouncePolicy, Core, Torrent};
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_swarm_registry::{AnnounceData, AnnounceRequest, Error, ScrapeData, SwarmRegistry, TrackerId};

use crate::CurrentClock;

/// The domain layer tracker service.
///
/// Its main responsibility is to handle the `announce` and `scrape` requests.
/// It is shared by all the HTTP trackers started by the application.
pub struct Tracker {
    announce_policy: AnnouncePolicy,
    inactive_peer_cleanup_interval: Duration,
    on_reverse_proxy: bool,
    swarms: SwarmRegistry,
}

impl Tracker {
    /// `Tracker` constructor.
    ///
    /// When the configuration does not fix the tracker id a random one is
    /// generated.
    #[must_use]
    pub fn new(config: &Core) -> Tracker {
        Tracker {
            announce_policy: config.announce_policy,
            inactive_peer_cleanup_interval: Duration::from_secs(config.inactive_peer_cleanup_interval),
            on_reverse_proxy: config.net.on_reverse_proxy,
            swarms: SwarmRegistry::new(TrackerId::from_config(config.tracker_id.as_deref())),
        }
    }

    /// Returns `true` is the tracker is behind a reverse proxy.
    #[must_use]
    pub fn is_behind_reverse_proxy(&self) -> bool {
        self.on_reverse_proxy
    }

    #[must_use]
    pub fn get_announce_policy(&self) -> AnnouncePolicy {
        self.announce_policy
    }

    #[must_use]
    pub fn tracker_id(&self) -> &TrackerId {
        self.swarms.id()
    }

    /// It handles an announce request from the peer listening on
    /// `listen_address`.
    ///
    /// BEP 03: [The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html).
    ///
    /// # Errors
    ///
    /// Will return an error if the request carries a tracker id other than
    /// this tracker's, or if the compact peer list can not be written.
    #[track_caller]
    pub fn announce(&self, listen_address: &SocketAddr, request: &AnnounceRequest) -> Result<AnnounceData, Error> {
        self.swarms.process_announce(CurrentClock::now(), listen_address, request)
    }

    /// It handles a scrape request.
    ///
    /// BEP 48: [Tracker Protocol Extension: Scrape](https://www.bittorrent.org/beps/bep_0048.html).
    #[must_use]
    pub fn scrape(&self, info_hashes: &[InfoHash]) -> ScrapeData {
        self.swarms.scrape(info_hashes)
    }

    /// Registers the torrents listed in the configuration, with their names.
    ///
    /// # Errors
    ///
    /// Will return an error on the first info hash that is already registered.
    #[track_caller]
    pub fn register_torrents(&self, torrents: &[Torrent]) -> Result<(), Error> {
        for torrent in torrents {
            tracing::info!("Registering torrent: {torrent}");
            self.swarms.register_swarm(&torrent.info_hash, &torrent.name)?;
        }

        Ok(())
    }

    /// Removes the torrent swarm and all its peers.
    pub fn unregister_torrent(&self, info_hash: &InfoHash) {
        self.swarms.unregister_swarm(info_hash);
    }

    /// The peers last seen before this time are inactive.
    #[must_use]
    pub fn inactive_peers_deadline(&self) -> Duration {
        CurrentClock::now_sub(&(self.inactive_peer_cleanup_interval * 2)).unwrap_or_default()
    }

    /// Removes the peers last seen before `deadline` from all the swarms,
    /// usually [`Tracker::inactive_peers_deadline`]. The swarms are kept, even
    /// if they are left without peers.
    ///
    /// It returns the number of removed peers.
    pub fn reap_peers_seen_before(&self, deadline: Duration) -> usize {
        self.swarms.reap(deadline)
    }
}
