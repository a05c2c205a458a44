//! `Error` response for the [`HTTP tracker`](crate::servers::http).
//!
//! From the [BEP 03. The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html):
//!
//! _"Tracker responses are bencoded dictionaries. If a tracker response has a
//! key failure reason, then that maps to a human readable string which explains
//! why the query failed, and no other keys are required."_
//!
//! > **NOTICE**: error responses always have a `200 OK` status code.
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use torrust_tracker_swarm_registry::Error as SwarmError;

use super::bencoded;

/// `Error` response for the [`HTTP tracker`](crate::servers::http).
#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
pub struct Error {
    /// Human readable string which explains why the request failed.
    #[serde(rename = "failure reason")]
    pub failure_reason: String,
}

impl Error {
    #[must_use]
    pub fn new(failure_reason: &str) -> Self {
        Self {
            failure_reason: failure_reason.to_owned(),
        }
    }

    /// Returns the bencoded representation of the `Error` struct.
    ///
    /// ```rust
    /// use torrust_swarm_tracker::servers::http::v1::responses::error::Error;
    ///
    /// let err = Error::new("error message");
    ///
    /// // cspell:disable-next-line
    /// assert_eq!(err.write().unwrap(), b"d14:failure reason13:error messagee");
    /// ```
    ///
    /// # Errors
    ///
    /// Will return an error if `serde_bencode` cannot serialize the message.
    pub fn write(&self) -> Result<Vec<u8>, serde_bencode::Error> {
        serde_bencode::to_bytes(self)
    }
}

impl From<SwarmError> for Error {
    fn from(err: SwarmError) -> Self {
        Self {
            failure_reason: err.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self.write() {
            Ok(body) => bencoded(body),
            Err(err) => {
                tracing::error!(target: crate::servers::http::HTTP_TRACKER_LOG_TARGET, "failed to bencode failure reason: {err}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
