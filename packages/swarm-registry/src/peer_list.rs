use std::collections::HashMap;
use std::net::SocketAddr;

use torrust_tracker_primitives::peer::{self, PeerKey, PeerRecord};
use torrust_tracker_primitives::DurationSinceUnixEpoch;

/// The peers of one swarm, keyed by listen address.
///
/// Iteration order is unspecified. [`crate::selector::pick`] starts its
/// walk at a random position to spread the peers it returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeerList {
    peers: HashMap<PeerKey, PeerRecord>,
}

impl PeerList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &PeerKey) -> Option<&PeerRecord> {
        self.peers.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &PeerKey) -> bool {
        self.peers.contains_key(key)
    }

    /// Inserts a record under its own key, returning the record it replaced.
    pub fn insert(&mut self, record: PeerRecord) -> Option<PeerRecord> {
        self.peers.insert(record.key(), record)
    }

    /// Returns the record for the listen address, creating an empty one for
    /// `id` if the slot is free.
    pub fn get_or_insert(&mut self, id: &peer::Id, listen_address: &SocketAddr) -> &mut PeerRecord {
        self.peers
            .entry(PeerKey::from(listen_address))
            .or_insert_with(|| PeerRecord::new(id.clone(), *listen_address))
    }

    pub fn remove(&mut self, key: &PeerKey) -> Option<PeerRecord> {
        self.peers.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PeerKey, &PeerRecord)> {
        self.peers.iter()
    }

    /// `(complete, incomplete)`: peers with nothing left to download and the rest.
    #[must_use]
    pub fn complete_and_incomplete(&self) -> (u64, u64) {
        self.peers.values().fold((0, 0), |(complete, incomplete), record| {
            if record.is_complete() {
                (complete + 1, incomplete)
            } else {
                (complete, incomplete + 1)
            }
        })
    }

    /// Removes the peers last seen strictly before `deadline` and returns
    /// their keys.
    pub fn remove_seen_before(&mut self, deadline: DurationSinceUnixEpoch) -> Vec<PeerKey> {
        let mut removed = vec![];

        self.peers.retain(|key, record| {
            let keep = record.last_seen >= deadline;
            if !keep {
                removed.push(key.clone());
            }
            keep
        });

        removed
    }
}
