//! HTTP server routes for version `v1`.
//!
//! The announce route is mounted on the configured `announce_path`. The
//! scrape route exists only when a scrape path can be derived from it, see
//! [`scrape_path`].
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::propagate_header::PropagateHeaderLayer;
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, Span};

use super::handlers::{announce, scrape};
use crate::core::Tracker;
use crate::servers::http::HTTP_TRACKER_LOG_TARGET;

const ANNOUNCE: &str = "announce";
const SCRAPE: &str = "scrape";

/// Derives the scrape path from the announce path.
///
/// The last `/`-separated segment of the announce path must start with
/// `announce`. That prefix is replaced with `scrape` and the rest of the path
/// is kept. Any other announce path has no scrape path.
///
/// ```rust
/// use torrust_swarm_tracker::servers::http::v1::routes::scrape_path;
///
/// assert_eq!(scrape_path("/announce"), Some("/scrape".to_owned()));
/// assert_eq!(scrape_path("x/announce.php"), Some("x/scrape.php".to_owned()));
/// assert_eq!(scrape_path("/announce/x"), None);
/// assert_eq!(scrape_path("announce"), None);
/// ```
#[must_use]
pub fn scrape_path(announce_path: &str) -> Option<String> {
    let (first_part, last_part) = announce_path.rsplit_once('/')?;

    let after_announce = last_part.strip_prefix(ANNOUNCE)?;

    Some(format!("{first_part}/{SCRAPE}{after_announce}"))
}

/// Axum paths are absolute.
fn route_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// It adds the routes to the router.
///
/// The client IP is read from the connection info, so the router must be
/// served with `into_make_service_with_connect_info::<SocketAddr>`.
#[allow(clippy::needless_pass_by_value)]
pub fn router(tracker: Arc<Tracker>, announce_path: &str, &addr: &SocketAddr) -> Router {
    let mut router = Router::new().route(&route_path(announce_path), get(announce::handle).with_state(tracker.clone()));

    if let Some(scrape_path) = scrape_path(announce_path) {
        router = router.route(&route_path(&scrape_path), get(scrape::handle).with_state(tracker));
    }

    router
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateHeaderLayer::new(HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(move |request: &Request<Body>, _span: &Span| {
                    let method = request.method().to_string();
                    let uri = request.uri().to_string();
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();

                    tracing::span!(
                        target: HTTP_TRACKER_LOG_TARGET,
                        tracing::Level::INFO, "request", server_socket_addr= %addr, method = %method, uri = %uri, request_id = %request_id);
                })
                .on_response(move |response: &Response, latency: Duration, _span: &Span| {
                    let status_code = response.status();
                    let request_id = response
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();
                    let latency_ms = latency.as_millis();

                    tracing::span!(
                        target: HTTP_TRACKER_LOG_TARGET,
                        tracing::Level::INFO, "response", server_socket_addr= %addr, latency = %latency_ms, status = %status_code, request_id = %request_id);
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
