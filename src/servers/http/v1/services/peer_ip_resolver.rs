//! Resolves the address a peer is reachable on.
//!
//! A peer is stored in its swarm under its listen address, the pair
//! `(ip, port)`. The port always comes from the `port` param of the announce.
//! The IP is taken from the first source available:
//!
//! 1. The `ip` param of the announce, when the client sent one.
//! 2. The right-most `X-Forwarded-For` IP, when the tracker runs behind a
//!    reverse proxy.
//! 3. The remote IP of the connection, otherwise.
//!
//! Given this request chain:
//!
//! ```text
//! client          <-> http proxy 1                 <-> server
//! ip: 126.0.0.1       ip: 126.0.0.2                    ip: 126.0.0.3
//!                     X-Forwarded-For: 126.0.0.1
//! ```
//!
//! a tracker on reverse proxy mode resolves `126.0.0.1` and any other tracker
//! resolves `126.0.0.2`.
use std::net::{IpAddr, SocketAddr};
use std::panic::Location;

use thiserror::Error;
use torrust_tracker_primitives::peer::canonical_listen_address;

use crate::servers::http::v1::responses;

/// Places the client IP can be read from, besides the announce itself.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct ClientIpSources {
    /// The right most IP from the `X-Forwarded-For` HTTP header.
    pub right_most_x_forwarded_for: Option<IpAddr>,
    /// The remote IP of the connection.
    pub connection_info_ip: Option<IpAddr>,
}

#[derive(Error, Debug)]
pub enum PeerIpResolutionError {
    /// The tracker runs behind a reverse proxy but the request has no usable
    /// `X-Forwarded-For` header.
    #[error(
        "missing or invalid the right most X-Forwarded-For IP (mandatory on reverse proxy tracker configuration) in {location}"
    )]
    MissingRightMostXForwardedForIp { location: &'static Location<'static> },
    /// The connection info was not attached to the request.
    #[error("cannot get the client IP from the connection info in {location}")]
    MissingClientIp { location: &'static Location<'static> },
}

impl From<PeerIpResolutionError> for responses::error::Error {
    fn from(err: PeerIpResolutionError) -> Self {
        responses::error::Error {
            failure_reason: format!("Error resolving peer IP: {err}"),
        }
    }
}

/// Resolves the client IP from the request sources only.
///
/// ```rust
/// use std::net::IpAddr;
///
/// use torrust_swarm_tracker::servers::http::v1::services::peer_ip_resolver::{invoke, ClientIpSources};
///
/// let sources = ClientIpSources {
///     right_most_x_forwarded_for: Some("203.0.113.195".parse().unwrap()),
///     connection_info_ip: Some("10.0.0.1".parse().unwrap()),
/// };
///
/// assert_eq!(invoke(true, &sources).unwrap(), "203.0.113.195".parse::<IpAddr>().unwrap());
/// assert_eq!(invoke(false, &sources).unwrap(), "10.0.0.1".parse::<IpAddr>().unwrap());
/// ```
///
/// # Errors
///
/// Will return an error if the source required by the configuration is
/// missing from the request.
#[track_caller]
pub fn invoke(on_reverse_proxy: bool, client_ip_sources: &ClientIpSources) -> Result<IpAddr, PeerIpResolutionError> {
    if on_reverse_proxy {
        client_ip_sources
            .right_most_x_forwarded_for
            .ok_or(PeerIpResolutionError::MissingRightMostXForwardedForIp {
                location: Location::caller(),
            })
    } else {
        client_ip_sources
            .connection_info_ip
            .ok_or(PeerIpResolutionError::MissingClientIp {
                location: Location::caller(),
            })
    }
}

/// Resolves the listen address of the announcing peer.
///
/// An announced IP wins over every request source, so it is used even when
/// the request sources would fail to resolve. An IPv4-mapped IPv6 address is
/// resolved to its IPv4 form.
///
/// # Errors
///
/// Will return an error if there is no announced IP and [`invoke`] fails.
#[track_caller]
pub fn resolve_listen_address(
    on_reverse_proxy: bool,
    announced_ip: Option<IpAddr>,
    port: u16,
    client_ip_sources: &ClientIpSources,
) -> Result<SocketAddr, PeerIpResolutionError> {
    let ip = match announced_ip {
        Some(ip) => ip,
        None => invoke(on_reverse_proxy, client_ip_sources)?,
    };

    Ok(canonical_listen_address(&SocketAddr::new(ip, port)))
}
