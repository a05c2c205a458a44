//! Application services for the HTTP tracker.
//!
//! They sit between the Axum handlers and the [`Tracker`](crate::core::Tracker):
//! handlers extract and validate the request, services resolve the peer
//! address and call the tracker, responses encode the result.
pub mod announce;
pub mod peer_ip_resolver;
pub mod scrape;
