//! This module contains functions for percent decoding infohashes, peer IDs
//! and the other query params.
//!
//! Percent encoding is an encoding format used to encode arbitrary data in a
//! format that is safe to use in URLs. It is used by the HTTP tracker protocol
//! to encode infohashes and peer ids in the URLs of requests.
//!
//! `BitTorrent` infohashes and peer ids are percent encoded like any other
//! arbitrary URL parameter. But they are encoded from binary data (byte arrays)
//! which may not be valid UTF-8, so they are decoded into bytes, not strings.
//!
//! Query params are form encoded: a literal `+` is a space. A `+` byte is
//! sent as `%2B`.
//!
//! More information about "Percent Encoding" can be found here:
//!
//! - <https://datatracker.ietf.org/doc/html/rfc3986#section-2.1>
//! - <https://en.wikipedia.org/wiki/URL_encoding>
//! - <https://developer.mozilla.org/en-US/docs/Glossary/percent-encoding>
use torrust_tracker_primitives::info_hash::{self, InfoHash};
use torrust_tracker_primitives::peer;

/// Percent decodes a raw query param value into bytes.
#[must_use]
pub fn percent_decode_bytes(raw_param: &str) -> Vec<u8> {
    let raw_param = raw_param.replace('+', " ");
    percent_encoding::percent_decode_str(&raw_param).collect::<Vec<u8>>()
}

/// Percent decodes a raw query param value into a string. Invalid UTF-8
/// sequences are replaced with `U+FFFD`.
#[must_use]
pub fn percent_decode_text(raw_param: &str) -> String {
    String::from_utf8_lossy(&percent_decode_bytes(raw_param)).into_owned()
}

/// Percent decodes a percent encoded infohash. Internally an
/// [`InfoHash`] is a 20-byte array.
///
/// For example, given the infohash `3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0`,
/// it's percent encoded representation is `%3B%24U%04%CF%5F%11%BB%DB%E1%20%1C%EAjk%F4Z%EE%1B%C0`.
///
/// ```rust
/// use std::str::FromStr;
/// use torrust_swarm_tracker::servers::http::percent_encoding::percent_decode_info_hash;
/// use torrust_tracker_primitives::info_hash::InfoHash;
///
/// let encoded_infohash = "%3B%24U%04%CF%5F%11%BB%DB%E1%20%1C%EAjk%F4Z%EE%1B%C0";
///
/// let info_hash = percent_decode_info_hash(encoded_infohash).unwrap();
///
/// assert_eq!(
///     info_hash,
///     InfoHash::from_str("3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0").unwrap()
/// );
/// ```
///
/// # Errors
///
/// Will return `Err` if the decoded bytes do not represent a valid
/// [`InfoHash`].
#[track_caller]
pub fn percent_decode_info_hash(raw_info_hash: &str) -> Result<InfoHash, info_hash::ConversionError> {
    InfoHash::try_from(percent_decode_bytes(raw_info_hash))
}

/// Percent decodes a percent encoded peer id. Peer ids are opaque bytes of
/// any length, so decoding never fails.
///
/// ```rust
/// use torrust_swarm_tracker::servers::http::percent_encoding::percent_decode_peer_id;
/// use torrust_tracker_primitives::peer;
///
/// let encoded_peer_id = "%2DqB00000000000000000";
///
/// let peer_id = percent_decode_peer_id(encoded_peer_id);
///
/// assert_eq!(peer_id, peer::Id::from(*b"-qB00000000000000000"));
/// ```
#[must_use]
pub fn percent_decode_peer_id(raw_peer_id: &str) -> peer::Id {
    peer::Id::from(percent_decode_bytes(raw_peer_id))
}
