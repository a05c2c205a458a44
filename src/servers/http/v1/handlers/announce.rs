//! Axum [`handlers`](axum#handlers) for the `announce` requests.
//!
//! Refer to [HTTP server](crate::servers::http) for more information about the
//! `announce` request.
//!
//! The handler resolves the peer listen address and adds the announce
//! interval and the tracker id to what the swarm answers.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

use crate::core::Tracker;
use crate::servers::http::v1::extractors::announce_request::ExtractRequest;
use crate::servers::http::v1::extractors::client_ip_sources::Extract as ExtractClientIpSources;
use crate::servers::http::v1::requests::announce::Announce;
use crate::servers::http::v1::responses;
use crate::servers::http::v1::services::peer_ip_resolver::{self, ClientIpSources};
use crate::servers::http::v1::services;
use crate::servers::http::HTTP_TRACKER_LOG_TARGET;

#[allow(clippy::unused_async)]
pub async fn handle(
    State(tracker): State<Arc<Tracker>>,
    ExtractRequest(announce_request): ExtractRequest,
    ExtractClientIpSources(client_ip_sources): ExtractClientIpSources,
) -> Response {
    debug!(target: HTTP_TRACKER_LOG_TARGET, "http announce request: {:#?}", announce_request);

    match handle_announce(&tracker, &announce_request, &client_ip_sources) {
        Ok(response) => response.into_response(),
        Err(error) => {
            warn!(target: HTTP_TRACKER_LOG_TARGET, "announce failed: {}", error.failure_reason);
            error.into_response()
        }
    }
}

fn handle_announce(
    tracker: &Arc<Tracker>,
    announce_request: &Announce,
    client_ip_sources: &ClientIpSources,
) -> Result<responses::Announce, responses::error::Error> {
    let listen_address = peer_ip_resolver::resolve_listen_address(
        tracker.is_behind_reverse_proxy(),
        announce_request.ip,
        announce_request.port,
        client_ip_sources,
    )?;

    let announce_data = services::announce::invoke(tracker, &listen_address, announce_request)?;

    Ok(responses::Announce::new(
        announce_data,
        tracker.get_announce_policy().interval,
        tracker.tracker_id().as_str(),
    ))
}
