use std::process::ExitCode;

use torrust_swarm_tracker::servers::signals::global_shutdown_signal;
use torrust_swarm_tracker::{app, bootstrap};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let (config, tracker) = match bootstrap::app::setup() {
        Ok(setup) => setup,
        Err(err) => {
            eprintln!("Torrust failed to start: {err}");
            return ExitCode::FAILURE;
        }
    };

    let jobs = match app::start(&config, tracker).await {
        Ok(jobs) => jobs,
        Err(err) => {
            error!("Torrust failed to start: {err}");
            return ExitCode::FAILURE;
        }
    };

    // handle the signals
    global_shutdown_signal().await;

    info!("Torrust shutting down ...");

    jobs.stop().await;

    info!("Torrust successfully shutdown.");

    ExitCode::SUCCESS
}
