//! Testing helpers for the Torrust swarm tracker.
//!
//! Mainly configurations that can be used by many trackers running at the
//! same time in the test suite.
pub mod configuration;
pub mod random;
