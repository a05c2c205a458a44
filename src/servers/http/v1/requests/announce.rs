//! `Announce` request for the HTTP tracker.
//!
//! Data structures and logic for parsing the `announce` request.
use std::net::IpAddr;
use std::panic::Location;
use std::str::FromStr;

use thiserror::Error;
use torrust_tracker_located_error::{Located, LocatedError};
use torrust_tracker_primitives::announce_event::AnnounceEvent;
use torrust_tracker_primitives::info_hash::{self, InfoHash};
use torrust_tracker_primitives::{peer, NumberOfBytes};
use torrust_tracker_swarm_registry::AnnounceRequest;

use crate::servers::http::percent_encoding::{percent_decode_info_hash, percent_decode_peer_id, percent_decode_text};
use crate::servers::http::v1::query::{ParseQueryError, Query};
use crate::servers::http::v1::responses;

// Query param names
const INFO_HASH: &str = "info_hash";
const PEER_ID: &str = "peer_id";
const IP: &str = "ip";
const PORT: &str = "port";
const UPLOADED: &str = "uploaded";
const DOWNLOADED: &str = "downloaded";
const LEFT: &str = "left";
const COMPACT: &str = "compact";
const NO_PEER_ID: &str = "no_peer_id";
const EVENT: &str = "event";
const NUMWANT: &str = "numwant";
const TRACKER_ID: &str = "trackerid";

/// The `Announce` request. Fields use the domain types after parsing the
/// query params of the request.
///
/// ```rust
/// use torrust_swarm_tracker::servers::http::v1::requests::announce::Announce;
/// use torrust_tracker_primitives::announce_event::AnnounceEvent;
/// use torrust_tracker_primitives::info_hash::InfoHash;
/// use torrust_tracker_primitives::peer;
///
/// let request = Announce {
///     // Mandatory params
///     info_hash: "3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0".parse::<InfoHash>().unwrap(),
///     port: 17548,
///     uploaded: 0,
///     downloaded: 0,
///     left: 0,
///     // Optional params
///     peer_id: peer::Id::from("-qB00000000000000001"),
///     ip: None,
///     event: AnnounceEvent::Started,
///     compact: false,
///     no_peer_id: false,
///     numwant: None,
///     tracker_id: None,
/// };
/// ```
///
/// > **NOTICE**: The [BEP 03. The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html)
/// > makes `peer_id` mandatory. This tracker accepts requests without it and
/// > keeps the peer with an empty id.
#[derive(Debug, PartialEq, Default)]
pub struct Announce {
    // Mandatory params
    /// The `InfoHash` of the torrent.
    pub info_hash: InfoHash,

    /// The port the peer is listening on.
    pub port: u16,

    /// The number of bytes uploaded by the peer.
    pub uploaded: NumberOfBytes,

    /// The number of bytes downloaded by the peer.
    pub downloaded: NumberOfBytes,

    /// The number of bytes left to download by the peer.
    pub left: NumberOfBytes,

    // Optional params
    /// The `PeerId` of the peer. Empty when it is not sent.
    pub peer_id: peer::Id,

    /// The IP the peer is listening on. The client IP is used when it is not
    /// sent.
    pub ip: Option<IpAddr>,

    /// The event that the peer is reporting. It can be `Started`, `Stopped`,
    /// `Completed`, none or any other value, which is ignored.
    pub event: AnnounceEvent,

    /// Whether the response should be in compact mode or not.
    ///
    /// Refer to [BEP 23. Tracker Returns Compact Peer Lists](https://www.bittorrent.org/beps/bep_0023.html)
    pub compact: bool,

    /// Leave the peer ids out of the non-compact peer list.
    pub no_peer_id: bool,

    /// The number of peers the client wants.
    pub numwant: Option<i64>,

    /// The `tracker id` a previous announce response returned.
    pub tracker_id: Option<String>,
}

/// Errors that can occur when parsing the `Announce` request.
///
/// The `info_hash` and `peer_id` query params are special because they contain
/// binary data. The `info_hash` is a 20-byte SHA1 hash and the `peer_id` is
/// any sequence of bytes.
#[derive(Error, Debug)]
pub enum ParseAnnounceQueryError {
    /// Missing query params for the announce request.
    #[error("missing query params for announce request in {location}")]
    MissingParams { location: &'static Location<'static> },
    /// Missing a mandatory param.
    #[error("missing param {param_name} in {location}")]
    MissingParam {
        location: &'static Location<'static>,
        param_name: String,
    },
    /// The param cannot be parsed into the domain type.
    #[error("invalid param value {param_value} for {param_name} in {location}")]
    InvalidParam {
        param_name: String,
        param_value: String,
        location: &'static Location<'static>,
    },
    /// The param value is not a valid infohash.
    #[error("invalid param value {param_value} for {param_name} in {source}")]
    InvalidInfoHashParam {
        param_name: String,
        param_value: String,
        source: LocatedError<'static, info_hash::ConversionError>,
    },
}

impl From<ParseQueryError> for responses::error::Error {
    fn from(err: ParseQueryError) -> Self {
        responses::error::Error {
            failure_reason: format!("Cannot parse query params: {err}"),
        }
    }
}

impl From<ParseAnnounceQueryError> for responses::error::Error {
    fn from(err: ParseAnnounceQueryError) -> Self {
        responses::error::Error {
            failure_reason: format!("Cannot parse query params for announce request: {err}"),
        }
    }
}

impl TryFrom<Query> for Announce {
    type Error = ParseAnnounceQueryError;

    fn try_from(query: Query) -> Result<Self, Self::Error> {
        Ok(Self {
            info_hash: extract_info_hash(&query)?,
            port: extract_port(&query)?,
            uploaded: extract_number_of_bytes(&query, UPLOADED)?,
            downloaded: extract_number_of_bytes(&query, DOWNLOADED)?,
            left: extract_number_of_bytes(&query, LEFT)?,
            peer_id: extract_peer_id(&query),
            ip: extract_ip(&query)?,
            event: extract_event(&query),
            compact: extract_flag(&query, COMPACT)?,
            no_peer_id: extract_flag(&query, NO_PEER_ID)?,
            numwant: extract_numwant(&query)?,
            tracker_id: extract_tracker_id(&query),
        })
    }
}

impl From<&Announce> for AnnounceRequest {
    fn from(announce: &Announce) -> Self {
        AnnounceRequest {
            info_hash: announce.info_hash,
            peer_id: announce.peer_id.clone(),
            uploaded: announce.uploaded,
            downloaded: announce.downloaded,
            left: announce.left,
            compact: announce.compact,
            no_peer_id: announce.no_peer_id,
            event: announce.event.clone(),
            num_want: announce.numwant.unwrap_or_default(),
            tracker_id: announce.tracker_id.clone(),
        }
    }
}

// Mandatory params

fn extract_info_hash(query: &Query) -> Result<InfoHash, ParseAnnounceQueryError> {
    match query.get_non_blank_param(INFO_HASH) {
        Some(raw_param) => {
            Ok(
                percent_decode_info_hash(&raw_param).map_err(|err| ParseAnnounceQueryError::InvalidInfoHashParam {
                    param_name: INFO_HASH.to_owned(),
                    param_value: raw_param.clone(),
                    source: Located(err).into(),
                })?,
            )
        }
        None => Err(ParseAnnounceQueryError::MissingParam {
            location: Location::caller(),
            param_name: INFO_HASH.to_owned(),
        }),
    }
}

fn extract_port(query: &Query) -> Result<u16, ParseAnnounceQueryError> {
    let raw_param = extract_mandatory(query, PORT)?;
    parse(PORT, &raw_param)
}

fn extract_number_of_bytes(query: &Query, param_name: &str) -> Result<NumberOfBytes, ParseAnnounceQueryError> {
    let raw_param = extract_mandatory(query, param_name)?;
    parse(param_name, &raw_param)
}

fn extract_mandatory(query: &Query, param_name: &str) -> Result<String, ParseAnnounceQueryError> {
    query
        .get_non_blank_param(param_name)
        .ok_or_else(|| ParseAnnounceQueryError::MissingParam {
            location: Location::caller(),
            param_name: param_name.to_owned(),
        })
}

// Optional params

fn extract_peer_id(query: &Query) -> peer::Id {
    query
        .get_param(PEER_ID)
        .map(|raw_param| percent_decode_peer_id(&raw_param))
        .unwrap_or_default()
}

fn extract_ip(query: &Query) -> Result<Option<IpAddr>, ParseAnnounceQueryError> {
    match query.get_non_blank_param(IP) {
        Some(raw_param) => Ok(Some(parse(IP, &percent_decode_text(&raw_param))?)),
        None => Ok(None),
    }
}

fn extract_event(query: &Query) -> AnnounceEvent {
    match query.get_param(EVENT) {
        Some(raw_param) => AnnounceEvent::from(percent_decode_text(&raw_param).as_str()),
        None => AnnounceEvent::None,
    }
}

fn extract_flag(query: &Query, param_name: &str) -> Result<bool, ParseAnnounceQueryError> {
    match query.get_non_blank_param(param_name) {
        Some(raw_param) => parse_bool(param_name, &raw_param),
        None => Ok(false),
    }
}

fn extract_numwant(query: &Query) -> Result<Option<i64>, ParseAnnounceQueryError> {
    match query.get_non_blank_param(NUMWANT) {
        Some(raw_param) => Ok(Some(parse(NUMWANT, &raw_param)?)),
        None => Ok(None),
    }
}

fn extract_tracker_id(query: &Query) -> Option<String> {
    query.get_param(TRACKER_ID).map(|raw_param| percent_decode_text(&raw_param))
}

fn parse<T: FromStr>(param_name: &str, raw_param: &str) -> Result<T, ParseAnnounceQueryError> {
    raw_param.parse::<T>().map_err(|_| ParseAnnounceQueryError::InvalidParam {
        param_name: param_name.to_owned(),
        param_value: raw_param.to_owned(),
        location: Location::caller(),
    })
}

fn parse_bool(param_name: &str, raw_param: &str) -> Result<bool, ParseAnnounceQueryError> {
    match raw_param {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseAnnounceQueryError::InvalidParam {
            param_name: param_name.to_owned(),
            param_value: raw_param.to_owned(),
            location: Location::caller(),
        }),
    }
}
