//! Axum [`handlers`](axum#handlers) for the `scrape` requests.
//!
//! Refer to [HTTP server](crate::servers::http) for more information about the
//! `scrape` request.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use crate::core::Tracker;
use crate::servers::http::v1::extractors::scrape_request::ExtractRequest;
use crate::servers::http::v1::requests::scrape::Scrape;
use crate::servers::http::v1::{responses, services};
use crate::servers::http::HTTP_TRACKER_LOG_TARGET;

#[allow(clippy::unused_async)]
pub async fn handle(State(tracker): State<Arc<Tracker>>, ExtractRequest(scrape_request): ExtractRequest) -> Response {
    debug!(target: HTTP_TRACKER_LOG_TARGET, "http scrape request: {:#?}", &scrape_request);

    handle_scrape(&tracker, &scrape_request).into_response()
}

fn handle_scrape(tracker: &Arc<Tracker>, scrape_request: &Scrape) -> responses::Scrape {
    services::scrape::invoke(tracker, &scrape_request.info_hashes).into()
}
