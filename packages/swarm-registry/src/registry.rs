//! The registry of all the swarms the tracker knows about.
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::panic::Location;

use parking_lot::Mutex;
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::DurationSinceUnixEpoch;

use crate::announce::{AnnounceData, AnnounceRequest};
use crate::error::Error;
use crate::notice::{self, Notice};
use crate::scrape::ScrapeData;
use crate::swarm::Swarm;
use crate::tracker_id::TrackerId;

/// Swarms by info hash, behind one registry-wide lock.
///
/// Every public operation takes the lock once and keeps it until its state
/// change is done. Log lines are written after the lock is released.
#[derive(Debug)]
pub struct SwarmRegistry {
    id: TrackerId,
    swarms: Mutex<BTreeMap<InfoHash, Swarm>>,
}

impl Default for SwarmRegistry {
    fn default() -> Self {
        Self::new(TrackerId::random())
    }
}

impl SwarmRegistry {
    #[must_use]
    pub fn new(id: TrackerId) -> Self {
        Self {
            id,
            swarms: Mutex::new(BTreeMap::new()),
        }
    }

    /// The id returned to clients as `tracker id`.
    #[must_use]
    pub fn id(&self) -> &TrackerId {
        &self.id
    }

    /// Adds an empty swarm with a display name.
    ///
    /// # Errors
    ///
    /// Will return [`Error::AlreadyExists`] if there is already a swarm for
    /// the info hash. The existing swarm is left untouched.
    #[track_caller]
    pub fn register_swarm(&self, info_hash: &InfoHash, name: &str) -> Result<(), Error> {
        {
            let mut swarms = self.swarms.lock();

            if swarms.contains_key(info_hash) {
                return Err(Error::AlreadyExists {
                    info_hash: *info_hash,
                    name: name.to_owned(),
                    location: Location::caller(),
                });
            }

            swarms.insert(*info_hash, Swarm::new(name));
        }

        Notice::SwarmRegistered {
            info_hash: *info_hash,
            name: name.to_owned(),
        }
        .log();

        Ok(())
    }

    /// Removes the swarm of the info hash, if any.
    pub fn unregister_swarm(&self, info_hash: &InfoHash) {
        let removed = self.swarms.lock().remove(info_hash);

        if removed.is_some() {
            Notice::SwarmUnregistered { info_hash: *info_hash }.log();
        }
    }

    /// Handles an announce for the peer listening on `listen_address`.
    ///
    /// The swarm is created, named after the hex info hash, on the first
    /// announce for an unknown info hash.
    ///
    /// # Errors
    ///
    /// Will return:
    ///
    /// - [`Error::InvalidTrackerId`] if the request carries a non-empty
    ///   tracker id other than [`SwarmRegistry::id`]. Nothing is changed.
    /// - [`Error::NonIpv4CompactEncoding`] if the compact peer list can't be
    ///   written.
    #[track_caller]
    pub fn process_announce(
        &self,
        now: DurationSinceUnixEpoch,
        listen_address: &SocketAddr,
        request: &AnnounceRequest,
    ) -> Result<AnnounceData, Error> {
        if let Some(tracker_id) = request.tracker_id.as_deref() {
            if !tracker_id.is_empty() && tracker_id != self.id.as_str() {
                return Err(Error::InvalidTrackerId {
                    tracker_id: tracker_id.to_owned(),
                    location: Location::caller(),
                });
            }
        }

        let mut notices = vec![];

        let result = {
            let mut swarms = self.swarms.lock();

            let swarm = swarms.entry(request.info_hash).or_insert_with(|| {
                notices.push(Notice::SwarmCreated {
                    info_hash: request.info_hash,
                });
                Swarm::new(&request.info_hash.to_hex_string())
            });

            swarm.announce_noting(now, listen_address, request, &mut notices)
        };

        notice::log_all(&notices);

        result
    }

    /// Metadata of the requested swarms, or of all of them when `info_hashes`
    /// is empty. Unknown info hashes are left out.
    #[must_use]
    pub fn scrape(&self, info_hashes: &[InfoHash]) -> ScrapeData {
        let swarms = self.swarms.lock();

        let mut scrape_data = ScrapeData::empty();

        if info_hashes.is_empty() {
            for (info_hash, swarm) in swarms.iter() {
                scrape_data.add_file(info_hash, swarm.metadata());
            }
        } else {
            for info_hash in info_hashes {
                if let Some(swarm) = swarms.get(info_hash) {
                    scrape_data.add_file(info_hash, swarm.metadata());
                }
            }
        }

        scrape_data
    }

    /// Removes, from every swarm, the peers last seen before `deadline`.
    /// Returns the number of peers removed. Swarms are never removed.
    pub fn reap(&self, deadline: DurationSinceUnixEpoch) -> usize {
        let mut notices = vec![];

        let removed: usize = self
            .swarms
            .lock()
            .iter_mut()
            .map(|(info_hash, swarm)| {
                let removed = swarm.reap_noting(deadline, &mut notices);
                if removed > 0 {
                    notices.push(Notice::SwarmReaped {
                        info_hash: *info_hash,
                        removed,
                    });
                }
                removed
            })
            .sum();

        notice::log_all(&notices);

        removed
    }

    #[must_use]
    pub fn swarm_metadata(&self, info_hash: &InfoHash) -> Option<SwarmMetadata> {
        self.swarms.lock().get(info_hash).map(Swarm::metadata)
    }

    /// Number of swarms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.swarms.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swarms.lock().is_empty()
    }
}
