//! Axum [`extractor`](axum::extract) for the places the client IP can come
//! from.
//!
//! - The right-most address of the `X-Forwarded-For` header, read with
//!   `RightmostXForwardedFor` from the `axum-client-ip` crate. It is the
//!   address of the client as seen by the last reverse proxy.
//! - The remote address of the connection, read with `ConnectInfo`.
//!
//! ```text
//! client          <-> http proxy 1                 <-> http proxy 2                          <-> server
//! ip: 126.0.0.1       ip: 126.0.0.2                    ip: 126.0.0.3                             ip: 126.0.0.4
//!                     X-Forwarded-For: 126.0.0.1       X-Forwarded-For: 126.0.0.1,126.0.0.2
//! ```
//!
//! For the request above the server gets:
//!
//! ```text
//! `right_most_x_forwarded_for` = 126.0.0.2
//! `connection_info_ip`         = 126.0.0.3
//! ```
//!
//! Extraction never fails. Which source is used is decided later, by the
//! [`peer_ip_resolver`](crate::servers::http::v1::services::peer_ip_resolver),
//! and only when the announce does not carry an `ip` param.
use std::convert::Infallible;
use std::net::SocketAddr;

use axum::async_trait;
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum_client_ip::RightmostXForwardedFor;

use crate::servers::http::v1::services::peer_ip_resolver::ClientIpSources;

/// Extractor for the [`ClientIpSources`] of a request.
pub struct Extract(pub ClientIpSources);

#[async_trait]
impl<S> FromRequestParts<S> for Extract
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let right_most_x_forwarded_for = RightmostXForwardedFor::from_request_parts(parts, state)
            .await
            .ok()
            .map(|header| header.0);

        let connection_info_ip = ConnectInfo::<SocketAddr>::from_request_parts(parts, state)
            .await
            .ok()
            .map(|connection_info| connection_info.0.ip());

        Ok(Extract(ClientIpSources {
            right_most_x_forwarded_for,
            connection_info_ip,
        }))
    }
}
