use derive_more::Display;

/// Announce events. Described on the
/// [BEP 3. The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html)
///
/// Parsing never fails: values other than the three defined events are kept
/// as [`AnnounceEvent::Unrecognized`] and tolerated by the tracker.
#[derive(Hash, Clone, Debug, Default, Display, PartialEq, Eq)]
pub enum AnnounceEvent {
    /// The peer has started downloading the torrent.
    #[display("started")]
    Started,
    /// The peer has ceased downloading the torrent.
    #[display("stopped")]
    Stopped,
    /// The peer has completed downloading the torrent.
    #[display("completed")]
    Completed,
    /// This is one of the announcements done at regular intervals.
    #[default]
    #[display("")]
    None,
    /// Any other non-empty value.
    #[display("{_0}")]
    Unrecognized(String),
}

impl From<&str> for AnnounceEvent {
    fn from(raw: &str) -> Self {
        match raw {
            "" => Self::None,
            "started" => Self::Started,
            "stopped" => Self::Stopped,
            "completed" => Self::Completed,
            other => Self::Unrecognized(other.to_owned()),
        }
    }
}
