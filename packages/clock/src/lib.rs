//! Time related functions and types.
//!
//! The tracker never reads the system time directly. Every timestamp comes
//! from a clock type so tests can freeze and move time at will:
//!
//! - [`clock::Working`]: the system clock, used in production.
//! - [`clock::Stopped`]: a per-thread fixed time, used in tests.
//!
//! Clocks use the type `DurationSinceUnixEpoch` which is a
//! `std::time::Duration` since the Unix Epoch (timestamp), so they do not
//! depend on the time zone of the host.
//!
//! Crates pick one with a `cfg(test)` alias:
//!
//! ```text
//! #[cfg(not(test))]
//! pub(crate) type CurrentClock = torrust_tracker_clock::clock::Working;
//!
//! #[cfg(test)]
//! pub(crate) type CurrentClock = torrust_tracker_clock::clock::Stopped;
//! ```
pub mod clock;
pub mod conv;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
