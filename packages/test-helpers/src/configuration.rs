//! Tracker configurations used in tests.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use torrust_tracker_configuration::{Configuration, HttpTracker, Threshold};

use crate::random;

/// This configuration is used for testing. It binds the HTTP tracker to a
/// port chosen by the OS so trackers do not collide if more than one runs at
/// the same time, and it fixes the tracker id to a random value so tests can
/// send it back.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    config.core.tracker_id = Some(random::string(20));

    config.http_trackers = vec![HttpTracker {
        enabled: true,
        bind_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
        ..Default::default()
    }];

    config
}

/// Ephemeral configuration with the tracker behind a reverse proxy: the client
/// IP comes from the `X-Forwarded-For` header.
#[must_use]
pub fn ephemeral_with_reverse_proxy() -> Configuration {
    let mut config = ephemeral();

    config.core.net.on_reverse_proxy = true;

    config
}

/// Ephemeral configuration serving announce requests on a custom path.
#[must_use]
pub fn ephemeral_with_announce_path(announce_path: &str) -> Configuration {
    let mut config = ephemeral();

    config.http_trackers[0].announce_path = announce_path.to_owned();

    config
}

/// Ephemeral configuration with the HTTP tracker disabled.
#[must_use]
pub fn ephemeral_with_no_services() -> Configuration {
    let mut config = ephemeral();

    for http_tracker in &mut config.http_trackers {
        http_tracker.enabled = false;
    }

    config
}
