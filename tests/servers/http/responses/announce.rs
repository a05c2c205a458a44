use std::net::SocketAddrV4;

use serde::Deserialize;
use serde_bytes::ByteBuf;
use torrust_tracker_swarm_registry::encoding::{decode_compact, VerbosePeer};

#[derive(Deserialize, Debug, PartialEq)]
pub struct Announce {
    pub complete: u64,
    pub incomplete: u64,
    pub interval: u32,
    pub peers: Vec<VerbosePeer>,
    #[serde(rename = "tracker id")]
    pub tracker_id: String,
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct Compact {
    pub complete: u64,
    pub incomplete: u64,
    pub interval: u32,
    pub peers: ByteBuf,
    #[serde(rename = "tracker id")]
    pub tracker_id: String,
}

impl Compact {
    pub fn peer_addresses(&self) -> Vec<SocketAddrV4> {
        decode_compact(&self.peers).expect("the compact peer list should be a multiple of six bytes")
    }
}

pub fn decode_verbose(bytes: &[u8]) -> Announce {
    serde_bencode::from_bytes(bytes)
        .unwrap_or_else(|_| panic!("response body should be a valid announce response, got \"{bytes:?}\""))
}

pub fn decode_compact_response(bytes: &[u8]) -> Compact {
    serde_bencode::from_bytes(bytes)
        .unwrap_or_else(|_| panic!("response body should be a valid compact announce response, got \"{bytes:?}\""))
}
