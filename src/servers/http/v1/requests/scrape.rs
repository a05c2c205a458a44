//! `Scrape` request for the HTTP tracker.
//!
//! Data structures and logic for parsing the `scrape` request.
use thiserror::Error;
use torrust_tracker_located_error::{Located, LocatedError};
use torrust_tracker_primitives::info_hash::{self, InfoHash};

use crate::servers::http::percent_encoding::percent_decode_info_hash;
use crate::servers::http::v1::query::Query;
use crate::servers::http::v1::responses;

// Query param names
const INFO_HASH: &str = "info_hash";

/// The `Scrape` request. An empty list of info hashes asks for all the
/// torrents the tracker knows about.
#[derive(Debug, PartialEq, Default)]
pub struct Scrape {
    pub info_hashes: Vec<InfoHash>,
}

/// Errors that can occur when parsing the `Scrape` request.
#[derive(Error, Debug)]
pub enum ParseScrapeQueryError {
    /// An `info_hash` param is not a 20-byte percent encoded array.
    #[error("invalid param value {param_value} for {param_name} in {source}")]
    InvalidInfoHashParam {
        param_name: String,
        param_value: String,
        source: LocatedError<'static, info_hash::ConversionError>,
    },
}

impl From<ParseScrapeQueryError> for responses::error::Error {
    fn from(err: ParseScrapeQueryError) -> Self {
        responses::error::Error {
            failure_reason: format!("Cannot parse query params for scrape request: {err}"),
        }
    }
}

impl TryFrom<Query> for Scrape {
    type Error = ParseScrapeQueryError;

    fn try_from(query: Query) -> Result<Self, Self::Error> {
        Ok(Self {
            info_hashes: extract_info_hashes(&query)?,
        })
    }
}

impl Scrape {
    /// The request for all the torrents.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }
}

fn extract_info_hashes(query: &Query) -> Result<Vec<InfoHash>, ParseScrapeQueryError> {
    let Some(raw_params) = query.get_param_vec(INFO_HASH) else {
        return Ok(vec![]);
    };

    let mut info_hashes = vec![];

    for raw_param in raw_params {
        let info_hash =
            percent_decode_info_hash(&raw_param).map_err(|err| ParseScrapeQueryError::InvalidInfoHashParam {
                param_name: INFO_HASH.to_owned(),
                param_value: raw_param.clone(),
                source: Located(err).into(),
            })?;

        info_hashes.push(info_hash);
    }

    Ok(info_hashes)
}
