use std::net::SocketAddr;
use std::sync::Arc;

use torrust_swarm_tracker::bootstrap::app::initialize_with_configuration;
use torrust_swarm_tracker::core::Tracker;
use torrust_swarm_tracker::servers::http::server::{HttpServer, Launcher, Running, Stopped};
use torrust_tracker_configuration::{Configuration, HttpTracker};
use torrust_tracker_swarm_registry::{AnnounceData, AnnounceRequest};

pub struct Environment<S> {
    pub config: Arc<HttpTracker>,
    pub tracker: Arc<Tracker>,
    pub server: HttpServer<S>,
}

impl<S> Environment<S> {
    /// Announces a peer directly to the tracker, without the HTTP server.
    pub fn add_torrent_peer(&self, listen_address: &SocketAddr, request: &AnnounceRequest) -> AnnounceData {
        self.tracker.announce(listen_address, request).unwrap()
    }
}

impl Environment<Stopped> {
    pub fn new(configuration: &Configuration) -> Self {
        let tracker = initialize_with_configuration(configuration).unwrap();

        let config = Arc::new(configuration.http_trackers[0].clone());

        let server = HttpServer::new(Launcher::new(config.bind_address, config.announce_path.clone()));

        Self { config, tracker, server }
    }

    pub async fn start(self) -> Environment<Running> {
        Environment {
            config: self.config,
            tracker: self.tracker.clone(),
            server: self.server.start(self.tracker).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Configuration) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            tracker: self.tracker,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn bind_address(&self) -> &SocketAddr {
        &self.server.state.binding
    }
}
