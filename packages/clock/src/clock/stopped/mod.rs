//! A clock that only moves when a test moves it.
//!
//! The time is kept per thread. A new thread starts at the default fixed
//! time: the Unix Epoch inside this crate's unit tests, the application start
//! time everywhere else.
use std::cell::Cell;
use std::num::IntErrorKind;
use std::time::Duration;

use super::{DurationSinceUnixEpoch, Time};
use crate::clock;

#[allow(clippy::module_name_repetitions)]
pub struct StoppedClock {}

#[allow(clippy::module_name_repetitions)]
pub trait Stopped: clock::Time {
    /// Sets the time of the current thread.
    fn local_set(unix_time: &DurationSinceUnixEpoch);

    /// Moves the time of the current thread forward.
    ///
    /// # Errors
    ///
    /// Will return `IntErrorKind::PosOverflow` if the new time does not fit in a `Duration`.
    fn local_add(duration: &Duration) -> Result<(), IntErrorKind>;

    /// Puts the time of the current thread back to the default fixed time.
    fn local_reset();
}

thread_local! {
    static FIXED_TIME: Cell<DurationSinceUnixEpoch> = Cell::new(default_fixed_time());
}

impl Time for clock::Stopped {
    fn now() -> DurationSinceUnixEpoch {
        FIXED_TIME.with(Cell::get)
    }
}

impl Stopped for clock::Stopped {
    fn local_set(unix_time: &DurationSinceUnixEpoch) {
        FIXED_TIME.with(|time| time.set(*unix_time));
    }

    fn local_add(duration: &Duration) -> Result<(), IntErrorKind> {
        FIXED_TIME.with(|time| {
            let moved = time.get().checked_add(*duration).ok_or(IntErrorKind::PosOverflow)?;
            time.set(moved);
            Ok(())
        })
    }

    fn local_reset() {
        Self::local_set(&default_fixed_time());
    }
}

#[cfg(not(test))]
fn default_fixed_time() -> DurationSinceUnixEpoch {
    use std::time::SystemTime;

    crate::static_time::TIME_AT_APP_START
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
}

#[cfg(test)]
fn default_fixed_time() -> DurationSinceUnixEpoch {
    DurationSinceUnixEpoch::ZERO
}
