//! Job that removes the inactive peers from every swarm.
//!
//! **Inactive peers** are peers that have not announced for more than twice
//! the `inactive_peer_cleanup_interval`, which is also how often the job runs.
//! The swarms are kept even when they are left without peers.
//!
//! Refer to [`torrust-tracker-configuration documentation`](https://docs.rs/torrust-tracker-configuration) for more info about that option.
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::oneshot;
use torrust_tracker_clock::conv::convert_from_timestamp_to_datetime_utc;
use torrust_tracker_configuration::Core;
use tracing::{info, warn};

use super::JobHandle;
use crate::core::Tracker;
use crate::servers::signals::{shutdown_signal, Halted};

pub const SWARM_REAPER_LOG_TARGET: &str = "SWARM REAPER";

/// It starts the job that reaps the inactive peers on every
/// `inactive_peer_cleanup_interval`.
///
/// The job holds a weak reference to the tracker and finishes once the
/// tracker is dropped. It is not started when the interval is zero.
#[must_use]
pub fn start_job(config: &Core, tracker: &Arc<Tracker>) -> Option<JobHandle> {
    if config.inactive_peer_cleanup_interval == 0 {
        warn!(target: SWARM_REAPER_LOG_TARGET, "Note: Not starting the swarm reaper, the cleanup interval is zero.");
        return None;
    }

    let weak_tracker = Arc::downgrade(tracker);
    let period = Duration::from_secs(config.inactive_peer_cleanup_interval);

    let (tx_halt, rx_halt) = oneshot::channel::<Halted>();

    let task = tokio::spawn(run(weak_tracker, period, rx_halt));

    Some(JobHandle::new(tx_halt, task))
}

async fn run(weak_tracker: Weak<Tracker>, period: Duration, rx_halt: oneshot::Receiver<Halted>) {
    let mut interval = tokio::time::interval(period);
    interval.tick().await;

    let halt = shutdown_signal(rx_halt);
    tokio::pin!(halt);

    loop {
        tokio::select! {
            () = &mut halt => {
                info!(target: SWARM_REAPER_LOG_TARGET, "Stopping swarm reaper job..");
                break;
            }
            _ = interval.tick() => {
                if let Some(tracker) = weak_tracker.upgrade() {
                    let start_time = Utc::now().time();
                    let deadline = tracker.inactive_peers_deadline();
                    if let Some(deadline) = convert_from_timestamp_to_datetime_utc(deadline) {
                        info!(target: SWARM_REAPER_LOG_TARGET, %deadline, "Reaping peers last seen before the deadline..");
                    }
                    let removed = tracker.reap_peers_seen_before(deadline);
                    info!(
                        target: SWARM_REAPER_LOG_TARGET,
                        "Reaped {removed} inactive peers in: {}ms",
                        (Utc::now().time() - start_time).num_milliseconds()
                    );
                } else {
                    break;
                }
            }
        }
    }
}
