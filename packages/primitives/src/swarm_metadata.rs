use derive_more::Constructor;

/// Swarm metadata dictionary in the scrape response.
///
/// See [BEP 48: Tracker Protocol Extension: Scrape](https://www.bittorrent.org/beps/bep_0048.html)
#[derive(Clone, Debug, PartialEq, Eq, Default, Constructor)]
pub struct SwarmMetadata {
    /// (i.e `seeders`): The number of active peers that have completed downloading
    pub complete: u64,
    /// (i.e `leechers`): The number of active peers that have not completed downloading
    pub incomplete: u64,
    /// (i.e `completed`): The number of `completed` events received for the swarm
    pub downloaded: u64,
    /// Display name of the swarm. `None` when the swarm name is empty.
    pub name: Option<String>,
}

impl SwarmMetadata {
    #[must_use]
    pub fn zeroed() -> Self {
        Self::default()
    }
}
