//! The `scrape` service.
//!
//! It delegates to the [`Tracker`](crate::core::Tracker::scrape). An empty
//! list of info hashes scrapes every swarm.
use std::sync::Arc;

use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_swarm_registry::ScrapeData;
use tracing::debug;

use crate::core::Tracker;
use crate::servers::http::HTTP_TRACKER_LOG_TARGET;

#[must_use]
pub fn invoke(tracker: &Arc<Tracker>, info_hashes: &[InfoHash]) -> ScrapeData {
    let scrape_data = tracker.scrape(info_hashes);

    debug!(target: HTTP_TRACKER_LOG_TARGET, requested = info_hashes.len(), returned = scrape_data.len(), "scrape");

    scrape_data
}
