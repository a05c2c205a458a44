use derive_more::Display;
use rand::Rng;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Identifier of a running tracker, sent to clients as `tracker id`.
///
/// Clients may send it back in the `trackerid` param. It is generated once,
/// when the tracker starts, unless it is fixed in the configuration.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct TrackerId(String);

impl TrackerId {
    pub const LEN: usize = 20;

    /// A random id of [`TrackerId::LEN`] lowercase hex chars.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();

        let id = (0..Self::LEN)
            .map(|_| char::from(HEX_CHARS[rng.gen_range(0..HEX_CHARS.len())]))
            .collect();

        Self(id)
    }

    /// The configured id, or a random one when it is missing or empty.
    #[must_use]
    pub fn from_config(configured: Option<&str>) -> Self {
        match configured {
            Some(id) if !id.is_empty() => Self(id.to_owned()),
            _ => Self::random(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrackerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
