//! `Scrape` response for the HTTP tracker [`scrape`](crate::servers::http::v1::requests::scrape::Scrape) request.
//!
//! The `files` dictionary is keyed by the raw 20 bytes of each info hash:
//!
//! ```text
//! d5:filesd20:<info hash>d8:completei1e10:downloadedi3e10:incompletei2e4:name3:isoeee
//! ```
use std::collections::BTreeMap;

use axum::response::IntoResponse;
use serde::Serialize;
use serde_bytes::ByteBuf;
use torrust_tracker_primitives::swarm_metadata::SwarmMetadata;
use torrust_tracker_swarm_registry::ScrapeData;

use super::{bencoded, Response};
use crate::servers::http::v1::responses;

#[derive(Serialize, Debug, PartialEq, Eq, Default, Clone)]
pub struct Scrape {
    pub files: BTreeMap<ByteBuf, File>,
}

#[derive(Serialize, Debug, PartialEq, Eq, Default, Clone)]
pub struct File {
    pub complete: u64,
    pub downloaded: u64,
    pub incomplete: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<SwarmMetadata> for File {
    fn from(metadata: SwarmMetadata) -> Self {
        Self {
            complete: metadata.complete,
            downloaded: metadata.downloaded,
            incomplete: metadata.incomplete,
            name: metadata.name.filter(|name| !name.is_empty()),
        }
    }
}

impl From<ScrapeData> for Scrape {
    fn from(scrape_data: ScrapeData) -> Self {
        Self {
            files: scrape_data
                .files
                .into_iter()
                .map(|(info_hash, metadata)| (ByteBuf::from(info_hash.bytes().to_vec()), metadata.into()))
                .collect(),
        }
    }
}

impl Response for Scrape {
    fn body(self) -> Result<Vec<u8>, responses::error::Error> {
        serde_bencode::to_bytes(&self).map_err(|err| responses::error::Error {
            failure_reason: format!("Cannot encode scrape response: {err}"),
        })
    }
}

impl IntoResponse for Scrape {
    fn into_response(self) -> axum::response::Response {
        match self.body() {
            Ok(body) => bencoded(body),
            Err(err) => err.into_response(),
        }
    }
}
