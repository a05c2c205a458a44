//! `Announce` response for the HTTP tracker [`announce`](crate::servers::http::v1::requests::announce::Announce) request.
//!
//! The swarm answers with the peer counts and the encoded peer list. The
//! handler adds the re-announce interval and the tracker id before the
//! dictionary is bencoded:
//!
//! ```text
//! d8:completei1e10:incompletei0e8:intervali1800e5:peers6:<6 bytes>10:tracker id20:<id>e
//! ```
use axum::response::IntoResponse;
use serde::Serialize;
use serde_bytes::ByteBuf;
use torrust_tracker_swarm_registry::encoding::VerbosePeer;
use torrust_tracker_swarm_registry::{AnnounceData, Peers};

use super::{bencoded, Response};
use crate::servers::http::v1::responses;

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct Announce {
    pub complete: u64,
    pub incomplete: u64,
    /// Seconds the client should wait before re-announcing.
    pub interval: u32,
    pub peers: PeerList,
    #[serde(rename = "tracker id")]
    pub tracker_id: String,
}

/// The `peers` value: a byte string in compact mode, a list of dictionaries
/// otherwise.
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum PeerList {
    Compact(ByteBuf),
    Verbose(Vec<VerbosePeer>),
}

impl From<Peers> for PeerList {
    fn from(peers: Peers) -> Self {
        match peers {
            Peers::Compact(bytes) => Self::Compact(ByteBuf::from(bytes)),
            Peers::Verbose(peers) => Self::Verbose(peers),
        }
    }
}

impl Announce {
    #[must_use]
    pub fn new(data: AnnounceData, interval: u32, tracker_id: &str) -> Self {
        Self {
            complete: data.complete,
            incomplete: data.incomplete,
            interval,
            peers: data.peers.into(),
            tracker_id: tracker_id.to_owned(),
        }
    }
}

impl Response for Announce {
    fn body(self) -> Result<Vec<u8>, responses::error::Error> {
        serde_bencode::to_bytes(&self).map_err(|err| responses::error::Error {
            failure_reason: format!("Cannot encode announce response: {err}"),
        })
    }
}

impl IntoResponse for Announce {
    fn into_response(self) -> axum::response::Response {
        match self.body() {
            Ok(body) => bencoded(body),
            Err(err) => err.into_response(),
        }
    }
}
