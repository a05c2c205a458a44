use derive_more::Display;
use serde::{Deserialize, Serialize};
use torrust_tracker_primitives::info_hash::InfoHash;

/// A torrent registered when the tracker starts, before any peer announces it.
///
/// ```toml
/// [[torrents]]
/// info_hash = "9c38422213e30bff212b30c360d26f9a02136422"
/// name = "ubuntu-24.04-desktop-amd64.iso"
/// ```
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Display)]
#[display("{name} ({info_hash})")]
pub struct Torrent {
    /// Hex encoded (40 chars) info hash.
    pub info_hash: InfoHash,

    /// Name returned in scrape responses.
    #[serde(default)]
    pub name: String,
}
