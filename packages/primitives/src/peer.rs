//! The peer state a swarm keeps for every announcing client.
//!
//! A sample record:
//!
//! ```rust
//! use std::net::{IpAddr, Ipv4Addr, SocketAddr};
//!
//! use torrust_tracker_primitives::peer::{self, PeerRecord};
//! use torrust_tracker_primitives::DurationSinceUnixEpoch;
//!
//! let record = PeerRecord {
//!     id: peer::Id::from(*b"-qB00000000000000000"),
//!     listen_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(126, 0, 0, 1)), 8080),
//!     last_seen: DurationSinceUnixEpoch::new(1_669_397_478_934, 0),
//!     uploaded: 0,
//!     downloaded: 0,
//!     left: 0,
//! };
//!
//! assert_eq!(record.key().to_string(), "126.0.0.1:8080");
//! assert!(record.is_complete());
//! ```
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use derive_more::Display;

use crate::{DurationSinceUnixEpoch, NumberOfBytes};

/// One peer's observed state within one swarm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerRecord {
    /// The identifier the client sent in its last announce. It can be empty.
    pub id: Id,
    /// The IP and port this peer is listening on.
    pub listen_address: SocketAddr,
    /// The last time the tracker received an announce from this peer.
    pub last_seen: DurationSinceUnixEpoch,
    /// The total amount of bytes uploaded by this peer so far.
    pub uploaded: NumberOfBytes,
    /// The total amount of bytes downloaded by this peer so far.
    pub downloaded: NumberOfBytes,
    /// The number of bytes this peer still has to download.
    pub left: NumberOfBytes,
}

impl PeerRecord {
    /// A fresh record with zeroed counters, before any announce data is applied.
    #[must_use]
    pub fn new(id: Id, listen_address: SocketAddr) -> Self {
        Self {
            id,
            listen_address,
            last_seen: DurationSinceUnixEpoch::ZERO,
            uploaded: 0,
            downloaded: 0,
            left: 0,
        }
    }

    #[must_use]
    pub fn key(&self) -> PeerKey {
        PeerKey::from(&self.listen_address)
    }

    /// A peer with nothing left to download (a seeder).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.left == 0
    }

    /// The IPv4 address the peer can be reached on, if it has one.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) count as IPv4.
    #[must_use]
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.listen_address.ip() {
            IpAddr::V4(ip) => Some(ip),
            IpAddr::V6(ip) => ip.to_ipv4_mapped(),
        }
    }
}

/// The listen address with an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`)
/// turned into the plain IPv4 one, so both forms share one peer slot.
///
/// ```rust
/// use std::net::SocketAddr;
///
/// use torrust_tracker_primitives::peer::canonical_listen_address;
///
/// let mapped: SocketAddr = "[::ffff:1.2.3.4]:6881".parse().unwrap();
///
/// assert_eq!(canonical_listen_address(&mapped), "1.2.3.4:6881".parse().unwrap());
/// ```
#[must_use]
pub fn canonical_listen_address(listen_address: &SocketAddr) -> SocketAddr {
    match listen_address.ip() {
        IpAddr::V6(ip) => ip
            .to_ipv4_mapped()
            .map_or(*listen_address, |ip| SocketAddr::new(IpAddr::V4(ip), listen_address.port())),
        IpAddr::V4(_) => *listen_address,
    }
}

/// The string form of a peer listen address (`ip:port`, or `[ip]:port` for
/// IPv6). It identifies a peer slot inside one swarm.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerKey(String);

impl PeerKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&SocketAddr> for PeerKey {
    fn from(listen_address: &SocketAddr) -> Self {
        Self(canonical_listen_address(listen_address).to_string())
    }
}

impl From<SocketAddr> for PeerKey {
    fn from(listen_address: SocketAddr) -> Self {
        Self::from(&listen_address)
    }
}

/// Opaque peer identifier.
///
/// Clients normally send 20 bytes (`-qB00000000000000000`) but the tracker
/// does not enforce any length, an empty id is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Id(Vec<u8>);

impl Id {
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts to hex string.
    ///
    /// For the `PeerId` `-qB00000000000000000` it returns `0x2d71423030303030303030303030303030303030`.
    /// An empty id is rendered as an empty string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }

        let mut tmp = vec![0u8; self.0.len() * 2];

        match binascii::bin2hex(&self.0, &mut tmp) {
            Ok(hex) => format!("0x{}", String::from_utf8_lossy(hex)),
            Err(_) => String::new(),
        }
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl From<Vec<u8>> for Id {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Id {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<[u8; 20]> for Id {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.as_bytes().to_vec())
    }
}

pub mod fixture {
    use std::net::{IpAddr, Ipv4Addr, SocketAddr};

    use super::{Id, PeerRecord};
    use crate::DurationSinceUnixEpoch;

    #[derive(PartialEq, Debug)]
    pub struct PeerRecordBuilder {
        record: PeerRecord,
    }

    impl Default for PeerRecordBuilder {
        fn default() -> Self {
            Self {
                record: PeerRecord {
                    id: Id::from(*b"-qB00000000000000000"),
                    listen_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080),
                    last_seen: DurationSinceUnixEpoch::new(1_669_397_478_934, 0),
                    uploaded: 0,
                    downloaded: 0,
                    left: 0,
                },
            }
        }
    }

    impl PeerRecordBuilder {
        #[must_use]
        pub fn seeder() -> Self {
            Self::default()
                .with_id(&Id::from(*b"-qB00000000000000001"))
                .with_listen_address(&SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 8080))
                .with_no_bytes_pending_to_download()
        }

        #[must_use]
        pub fn leecher() -> Self {
            Self::default()
                .with_id(&Id::from(*b"-qB00000000000000002"))
                .with_listen_address(&SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 2)), 8080))
                .with_bytes_pending_to_download(10)
        }

        #[must_use]
        pub fn with_id(mut self, id: &Id) -> Self {
            self.record.id = id.clone();
            self
        }

        #[must_use]
        pub fn with_listen_address(mut self, listen_address: &SocketAddr) -> Self {
            self.record.listen_address = *listen_address;
            self
        }

        #[must_use]
        pub fn with_bytes_pending_to_download(mut self, left: u64) -> Self {
            self.record.left = left;
            self
        }

        #[must_use]
        pub fn with_no_bytes_pending_to_download(mut self) -> Self {
            self.record.left = 0;
            self
        }

        #[must_use]
        pub fn last_seen_on(mut self, last_seen: DurationSinceUnixEpoch) -> Self {
            self.record.last_seen = last_seen;
            self
        }

        #[must_use]
        pub fn build(self) -> PeerRecord {
            self.record
        }
    }
}
