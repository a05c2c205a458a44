//! The `announce` service.
//!
//! It turns a parsed [`Announce`] request into a swarm
//! [`AnnounceRequest`] and delegates to the [`Tracker`](crate::core::Tracker::announce).
use std::net::SocketAddr;
use std::sync::Arc;

use torrust_tracker_swarm_registry::{AnnounceData, AnnounceRequest, Error};
use tracing::debug;

use crate::core::Tracker;
use crate::servers::http::v1::requests::announce::Announce;
use crate::servers::http::HTTP_TRACKER_LOG_TARGET;

/// # Errors
///
/// Will return the swarm error if the tracker rejects the announce.
pub fn invoke(tracker: &Arc<Tracker>, listen_address: &SocketAddr, announce: &Announce) -> Result<AnnounceData, Error> {
    let request = AnnounceRequest::from(announce);

    debug!(target: HTTP_TRACKER_LOG_TARGET, info_hash = %request.info_hash, %listen_address, event = ?request.event, "announce");

    tracker.announce(listen_address, &request)
}
