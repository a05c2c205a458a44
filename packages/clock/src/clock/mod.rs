use std::time::Duration;

use torrust_tracker_primitives::DurationSinceUnixEpoch;

use self::stopped::StoppedClock;
use self::working::WorkingClock;

pub mod stopped;
pub mod working;

/// A clock. The type parameter selects where the time comes from.
#[derive(Debug)]
pub struct Clock<T> {
    clock: std::marker::PhantomData<T>,
}

/// The system time.
pub type Working = Clock<WorkingClock>;
/// A fixed time, moved by hand.
pub type Stopped = Clock<StoppedClock>;

/// A source of timestamps.
pub trait Time: Sized {
    fn now() -> DurationSinceUnixEpoch;

    /// `None` before the Unix Epoch.
    #[must_use]
    fn now_sub(sub_time: &Duration) -> Option<DurationSinceUnixEpoch> {
        Self::now().checked_sub(*sub_time)
    }
}
