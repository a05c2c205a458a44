//! The state of one torrent: its peers and its `completed` counter.
use std::net::SocketAddr;

use torrust_tracker_primitives::announce_event::AnnounceEvent;
use torrust_tracker_primitives::peer::{self, PeerKey, PeerRecord};
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_primitives::DurationSinceUnixEpoch;

use crate::announce::{effective_num_want, AnnounceData, AnnounceRequest, Peers};
use crate::encoding::{encode_compact, encode_verbose};
use crate::error::Error;
use crate::notice::{self, Notice};
use crate::peer_list::PeerList;
use crate::selector;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Swarm {
    name: String,
    completed: u64,
    peers: PeerList,
}

impl Swarm {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            completed: 0,
            peers: PeerList::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of `completed` events received. It never decreases.
    #[must_use]
    pub fn completed(&self) -> u64 {
        self.completed
    }

    #[must_use]
    pub fn peers(&self) -> &PeerList {
        &self.peers
    }

    /// Records an announce from the peer listening on `listen_address` and
    /// returns the swarm counters with a selection of the other peers.
    ///
    /// A `stopped` event removes the peer and gets an empty peer list back.
    ///
    /// # Errors
    ///
    /// Will return [`Error::NonIpv4CompactEncoding`] if the compact form was
    /// requested and a selected peer has no IPv4 address. The peer state is
    /// updated anyway.
    pub fn announce(
        &mut self,
        now: DurationSinceUnixEpoch,
        listen_address: &SocketAddr,
        request: &AnnounceRequest,
    ) -> Result<AnnounceData, Error> {
        let mut notices = vec![];
        let result = self.announce_noting(now, listen_address, request, &mut notices);
        notice::log_all(&notices);
        result
    }

    /// Like [`Swarm::announce`], but the changes worth logging are pushed to
    /// `notices` instead of being logged.
    ///
    /// # Errors
    ///
    /// Same as [`Swarm::announce`].
    pub fn announce_noting(
        &mut self,
        now: DurationSinceUnixEpoch,
        listen_address: &SocketAddr,
        request: &AnnounceRequest,
        notices: &mut Vec<Notice>,
    ) -> Result<AnnounceData, Error> {
        let listen_address = &peer::canonical_listen_address(listen_address);
        let peer_key = PeerKey::from(listen_address);

        if self
            .peers
            .get(&peer_key)
            .is_some_and(|record| record.id != request.peer_id)
        {
            notices.push(Notice::PeerReplaced {
                peer_key: peer_key.clone(),
                peer_id: request.peer_id.clone(),
            });
            self.peers.remove(&peer_key);
        }

        let record = self.peers.get_or_insert(&request.peer_id, listen_address);
        record.last_seen = now;
        record.uploaded = request.uploaded;
        record.downloaded = request.downloaded;
        record.left = request.left;

        let mut stopped = false;

        match &request.event {
            AnnounceEvent::None | AnnounceEvent::Started => {}
            AnnounceEvent::Completed => self.completed += 1,
            AnnounceEvent::Stopped => {
                self.peers.remove(&peer_key);
                stopped = true;
            }
            AnnounceEvent::Unrecognized(event) => {
                notices.push(Notice::UnrecognizedEvent {
                    peer_key: peer_key.clone(),
                    event: event.clone(),
                });
            }
        }

        let (complete, incomplete) = self.peers.complete_and_incomplete();

        let want = if stopped {
            0
        } else {
            effective_num_want(request.num_want, self.peers.len())
        };

        let selected: Vec<&PeerRecord> = selector::pick(&self.peers, &peer_key, request.compact, want)
            .into_iter()
            .filter_map(|key| self.peers.get(key))
            .collect();

        let peers = if request.compact {
            Peers::Compact(encode_compact(selected)?)
        } else {
            Peers::Verbose(encode_verbose(selected, request.no_peer_id))
        };

        Ok(AnnounceData::new(complete, incomplete, peers))
    }

    /// The scrape entry of the swarm.
    #[must_use]
    pub fn metadata(&self) -> SwarmMetadata {
        let (complete, incomplete) = self.peers.complete_and_incomplete();

        SwarmMetadata::new(
            complete,
            incomplete,
            self.completed,
            (!self.name.is_empty()).then(|| self.name.clone()),
        )
    }

    /// Removes the peers last seen before `deadline` and returns how many
    /// were removed. The swarm stays even if it ends up empty.
    pub fn reap(&mut self, deadline: DurationSinceUnixEpoch) -> usize {
        let mut notices = vec![];
        let removed = self.reap_noting(deadline, &mut notices);
        notice::log_all(&notices);
        removed
    }

    /// Like [`Swarm::reap`], with a [`Notice::PeerReaped`] pushed for every
    /// removed peer.
    pub fn reap_noting(&mut self, deadline: DurationSinceUnixEpoch, notices: &mut Vec<Notice>) -> usize {
        let removed = self.peers.remove_seen_before(deadline);
        let count = removed.len();

        notices.extend(removed.into_iter().map(|peer_key| Notice::PeerReaped { peer_key }));

        count
    }
}
