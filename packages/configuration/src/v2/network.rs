use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Network {
    /// Whether the tracker is behind a reverse proxy.
    /// If the tracker is behind a reverse proxy, the rightmost
    /// `X-Forwarded-For` address is taken as the client's IP address instead
    /// of the connection's remote address.
    #[serde(default = "Network::default_on_reverse_proxy")]
    pub on_reverse_proxy: bool,
}

impl Network {
    fn default_on_reverse_proxy() -> bool {
        false
    }
}
