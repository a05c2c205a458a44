//! HTTP Tracker.
//!
//! This module contains the HTTP tracker implementation.
//!
//! The HTTP tracker is a simple HTTP server that responds to two `GET` requests:
//!
//! - `Announce`: used to announce the presence of a peer to the tracker.
//! - `Scrape`: used to get information about torrents.
//!
//! Both responses are [bencoded](https://en.wikipedia.org/wiki/Bencode)
//! dictionaries sent with the `200 OK` status code, even when the request
//! fails. A failed request gets a dictionary with only a `failure reason`:
//!
//! ```text
//! d14:failure reason18:Missing info_hashe
//! ```
//!
//! ## Table of Contents
//!
//! - [Requests](#requests)
//!     - [Announce](#announce)
//!     - [Scrape](#scrape)
//! - [Paths](#paths)
//! - [Links](#links)
//!
//! ## Requests
//!
//! ### Announce
//!
//! **Query parameters**
//!
//! Parameter | Type | Description | Required | Default | Example
//! ---|---|---|---|---|---
//! [`info_hash`](crate::servers::http::v1::requests::announce::Announce::info_hash) | percent encoded 20-byte array | The `Info Hash` of the torrent. | Yes | No | `%81%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00`
//! [`peer_id`](crate::servers::http::v1::requests::announce::Announce::peer_id) | percent encoded bytes | The ID of the peer. Any length, including none. | No | empty | `-qB00000000000000001`
//! [`port`](crate::servers::http::v1::requests::announce::Announce::port) | integer | The port the peer listens on. | Yes | No | `17548`
//! [`uploaded`](crate::servers::http::v1::requests::announce::Announce::uploaded) | non-negative integer | The number of bytes uploaded by the peer. | Yes | No | `0`
//! [`downloaded`](crate::servers::http::v1::requests::announce::Announce::downloaded) | non-negative integer | The number of bytes downloaded by the peer. | Yes | No | `0`
//! [`left`](crate::servers::http::v1::requests::announce::Announce::left) | non-negative integer | The number of bytes pending to download. | Yes | No | `0`
//! [`ip`](crate::servers::http::v1::requests::announce::Announce::ip) | IP address | The IP the peer listens on, instead of the client IP. | No | client IP | `2.137.87.41`
//! [`event`](crate::servers::http::v1::requests::announce::Announce::event) | string | `started`, `completed` or `stopped`. Other values are ignored. | No | empty | `completed`
//! [`compact`](crate::servers::http::v1::requests::announce::Announce::compact) | boolean | Whether the tracker should return a compact peer list. | No | `false` | `1`
//! [`no_peer_id`](crate::servers::http::v1::requests::announce::Announce::no_peer_id) | boolean | Leave the peer ids out of the non-compact peer list. | No | `false` | `1`
//! [`numwant`](crate::servers::http::v1::requests::announce::Announce::numwant) | integer | The maximum number of peers wanted. Values out of `1..=50` mean `50`. | No | `50` | `30`
//! [`trackerid`](crate::servers::http::v1::requests::announce::Announce::tracker_id) | string | The `tracker id` returned by a previous announce. | No | No | `4a1c4d9b0e7f2a5c8d3e`
//!
//! Booleans accept `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`,
//! `FALSE`, `false` and `False`. An empty optional param is the same as a
//! missing one.
//!
//! **Sample announce URL**
//!
//! <http://0.0.0.0:7070/announce?info_hash=%81%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00&peer_id=-qB00000000000000001&port=17548&uploaded=0&downloaded=0&left=0&event=started>
//!
//! **Sample non-compact response**
//!
//! ```text
//! d8:completei1e10:incompletei1e8:intervali1800e5:peersld2:ip15:105.105.105.1057:peer id20:-qB000000000000000014:port5:28784ee10:tracker id20:4a1c4d9b0e7f2a5c8d3ee
//! ```
//!
//! The port of every peer is a decimal string.
//!
//! **Sample compact response**
//!
//! With `compact=1` the peers are a single byte string, 6 bytes per peer:
//! 4 bytes of IPv4 address and 2 bytes of port, both in network byte order.
//! Peers without an IPv4 address are left out of compact peer lists.
//!
//! ```text
//! d8:completei1e10:incompletei1e8:intervali1800e5:peers6:iiiipp10:tracker id20:4a1c4d9b0e7f2a5c8d3ee
//! ```
//!
//! ### Scrape
//!
//! The `info_hash` param can be repeated. When there is none the response
//! contains all the torrents the tracker knows about. Unknown info hashes
//! are left out.
//!
//! **Sample scrape URL**
//!
//! <http://0.0.0.0:7070/scrape?info_hash=%81%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00%00>
//!
//! **Sample response**
//!
//! ```text
//! d5:filesd20:xxxxxxxxxxxxxxxxxxxxd8:completei1e10:downloadedi0e10:incompletei1e4:name10:ubuntu.isoeee
//! ```
//!
//! Where `xxxxxxxxxxxxxxxxxxxx` are the 20 raw bytes of the info hash. The
//! `name` key is only present for torrents with a non-empty name.
//!
//! ## Paths
//!
//! The announce path is configurable (`/announce` by default). The scrape
//! path is derived from it with [`scrape_path`](crate::servers::http::v1::routes::scrape_path):
//! the `announce` prefix of the last path segment is replaced with `scrape`.
//! When the last segment does not start with `announce` there is no scrape
//! endpoint.
//!
//! ## Links
//!
//! - [BEP 03. The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html).
//! - [BEP 23. Tracker Returns Compact Peer Lists](https://www.bittorrent.org/beps/bep_0023.html).
//! - [BEP 48. Tracker Protocol Extension: Scrape](https://www.bittorrent.org/beps/bep_0048.html).
//! - [Vuze wiki. Tracker Scrape](https://wiki.vuze.com/w/Scrape).
use serde::{Deserialize, Serialize};

pub mod percent_encoding;
pub mod server;
pub mod v1;

pub const HTTP_TRACKER_LOG_TARGET: &str = "HTTP TRACKER";

/// The version of the HTTP tracker.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub enum Version {
    /// The `v1` version of the HTTP tracker.
    V1,
}
