use torrust_tracker_primitives::info_hash::InfoHash;

use crate::common::http::{percent_encode_bytes, Query, QueryParam};

/// Builds the query of a scrape request. An empty query scrapes every swarm.
#[derive(Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    pub fn add_info_hash(mut self, info_hash: &InfoHash) -> Self {
        self.query
            .add_param(QueryParam::new("info_hash", &percent_encode_bytes(&info_hash.bytes())));
        self
    }

    pub fn add_raw_info_hash(mut self, raw_info_hash: &str) -> Self {
        self.query.add_param(QueryParam::new("info_hash", raw_info_hash));
        self
    }

    pub fn query(self) -> Query {
        self.query
    }
}
