pub mod asserts;
pub mod environment;
pub mod responses;

pub type Started = environment::Environment<torrust_swarm_tracker::servers::http::server::Running>;
