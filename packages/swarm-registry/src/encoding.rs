//! Peer list encodings of the announce response.
//!
//! - Compact ([BEP 23](https://www.bittorrent.org/beps/bep_0023.html)): 6
//!   bytes per peer, the IPv4 address followed by the port, both big-endian,
//!   with no separator. Only IPv4 peers can be written.
//! - Verbose ([BEP 3](https://www.bittorrent.org/beps/bep_0003.html)): one
//!   dictionary per peer with `ip`, `port` and, unless suppressed, `peer id`.
use std::net::{Ipv4Addr, SocketAddrV4};
use std::panic::Location;

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;
use thiserror::Error;
use torrust_tracker_primitives::peer::PeerRecord;

use crate::error::Error;

/// Size in bytes of one compact peer.
pub const COMPACT_PEER_LEN: usize = 6;

/// Writes the peers in compact form.
///
/// # Errors
///
/// Will return [`Error::NonIpv4CompactEncoding`] for the first peer that has
/// no IPv4 address. Nothing is returned for the peers written before it.
#[track_caller]
pub fn encode_compact<'a>(records: impl IntoIterator<Item = &'a PeerRecord>) -> Result<Vec<u8>, Error> {
    let mut bytes: Vec<u8> = vec![];

    for record in records {
        let Some(ip) = record.ipv4() else {
            return Err(Error::NonIpv4CompactEncoding {
                peer_key: record.key(),
                location: Location::caller(),
            });
        };

        bytes.extend_from_slice(&u32::from(ip).to_be_bytes());
        bytes.extend_from_slice(&record.listen_address.port().to_be_bytes());
    }

    Ok(bytes)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("compact peer list length {len} is not a multiple of {COMPACT_PEER_LEN}")]
    InvalidLength { len: usize },
}

/// Reads a compact peer list back into addresses.
///
/// # Errors
///
/// Will return [`DecodeError::InvalidLength`] if the buffer can't be split in
/// 6-byte chunks.
pub fn decode_compact(bytes: &[u8]) -> Result<Vec<SocketAddrV4>, DecodeError> {
    if bytes.len() % COMPACT_PEER_LEN != 0 {
        return Err(DecodeError::InvalidLength { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(COMPACT_PEER_LEN)
        .map(|chunk| {
            let ip = Ipv4Addr::new(chunk[0], chunk[1], chunk[2], chunk[3]);
            let port = u16::from_be_bytes([chunk[4], chunk[5]]);
            SocketAddrV4::new(ip, port)
        })
        .collect())
}

/// A peer of the verbose peer list.
///
/// ```rust
/// use std::net::{IpAddr, Ipv4Addr, SocketAddr};
///
/// use torrust_tracker_primitives::peer::{self, PeerRecord};
/// use torrust_tracker_swarm_registry::encoding::VerbosePeer;
///
/// let record = PeerRecord::new(peer::Id::from("peerA"), SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 2, 3, 4)), 6881));
///
/// let peer = VerbosePeer::from_record(&record, false);
///
/// assert_eq!(peer.ip, "1.2.3.4");
/// assert_eq!(peer.port, "6881");
/// assert_eq!(peer.peer_id.as_deref().map(Vec::as_slice), Some(b"peerA".as_slice()));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VerbosePeer {
    /// Dotted-decimal for IPv4 (and IPv4-mapped) addresses.
    pub ip: String,
    /// Decimal port number.
    pub port: String,
    #[serde(rename = "peer id", default, skip_serializing_if = "Option::is_none")]
    pub peer_id: Option<ByteBuf>,
}

impl VerbosePeer {
    #[must_use]
    pub fn from_record(record: &PeerRecord, no_peer_id: bool) -> Self {
        let ip = match record.ipv4() {
            Some(ip) => ip.to_string(),
            None => record.listen_address.ip().to_string(),
        };

        Self {
            ip,
            port: record.listen_address.port().to_string(),
            peer_id: (!no_peer_id).then(|| ByteBuf::from(record.id.as_bytes().to_vec())),
        }
    }
}

/// Writes the peers in verbose form, without their ids if `no_peer_id` is set.
#[must_use]
pub fn encode_verbose<'a>(records: impl IntoIterator<Item = &'a PeerRecord>, no_peer_id: bool) -> Vec<VerbosePeer> {
    records
        .into_iter()
        .map(|record| VerbosePeer::from_record(record, no_peer_id))
        .collect()
}
