//! Choice of the peers disclosed to an announcing client.
use rand::Rng;
use torrust_tracker_primitives::peer::PeerKey;

use crate::peer_list::PeerList;

/// Returns up to `count` keys from `peers`, skipping `exclude` and, when
/// `ipv4_only` is set, the peers without an IPv4 address.
///
/// The walk over the peer list starts at a random position on every call
/// and wraps around, so clients of a large swarm get different subsets. The
/// result is neither sorted nor a uniform random sample: peers that follow
/// each other in the list tend to be returned together.
#[must_use]
pub fn pick<'a>(peers: &'a PeerList, exclude: &PeerKey, ipv4_only: bool, count: usize) -> Vec<&'a PeerKey> {
    if count == 0 || peers.is_empty() {
        return vec![];
    }

    let offset = rand::thread_rng().gen_range(0..peers.len());

    peers
        .iter()
        .skip(offset)
        .chain(peers.iter().take(offset))
        .filter(|(key, _)| *key != exclude)
        .filter(|(_, record)| !ipv4_only || record.ipv4().is_some())
        .map(|(key, _)| key)
        .take(count)
        .collect()
}
