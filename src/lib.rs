//! **Torrust Swarm Tracker** is a `BitTorrent` HTTP tracker written in Rust.
//!
//! It keeps, in memory, one swarm per torrent (identified by its info hash)
//! with the peers that announced it. Peers use two `GET` requests:
//!
//! - `announce`: a peer tells the tracker it is (still) in a swarm and gets
//!   a list of other peers of that swarm back.
//! - `scrape`: a client asks for the statistics of one or more swarms.
//!
//! Responses are bencoded dictionaries, as described in
//! [BEP 3](https://www.bittorrent.org/beps/bep_0003.html),
//! [BEP 23](https://www.bittorrent.org/beps/bep_0023.html) (compact peer lists)
//! and [BEP 48](https://www.bittorrent.org/beps/bep_0048.html) (scrape).
//!
//! # Table of contents
//!
//! - [Running the tracker](#running-the-tracker)
//! - [Configuration](#configuration)
//! - [Components](#components)
//!
//! # Running the tracker
//!
//! ```text
//! cargo run
//! ```
//!
//! The tracker loads `./share/default/config/tracker.toml` unless the
//! `TORRUST_TRACKER_CONFIG_TOML_PATH` env var points to another file or the
//! `TORRUST_TRACKER_CONFIG_TOML` env var contains the whole TOML document.
//!
//! With the default configuration the announce endpoint is:
//!
//! ```text
//! http://127.0.0.1:7070/announce?info_hash=%3B%24U%04%CF%5F%11%BB%DB%E1%20%1C%EAjk%F4Z%EE%1B%C0&peer_id=-qB00000000000000001&port=17548&uploaded=0&downloaded=0&left=0
//! ```
//!
//! and the scrape endpoint:
//!
//! ```text
//! http://127.0.0.1:7070/scrape?info_hash=%3B%24U%04%CF%5F%11%BB%DB%E1%20%1C%EAjk%F4Z%EE%1B%C0
//! ```
//!
//! # Configuration
//!
//! Refer to the [`torrust_tracker_configuration`] crate for the available
//! options. Torrents can be registered with a display name before any peer
//! announces them.
//!
//! # Components
//!
//! - [`core`]: the tracker domain. It owns the
//!   [`SwarmRegistry`](torrust_tracker_swarm_registry::SwarmRegistry) and the
//!   announce policy.
//! - [`servers`]: the HTTP tracker delivery layer.
//! - [`bootstrap`]: configuration, logging and the jobs started with the
//!   application (HTTP trackers and the inactive peer reaper).
//! - [`app`]: starts the jobs.
use torrust_tracker_clock::clock;

pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
