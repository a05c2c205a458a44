//! Tracker application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently: one per enabled HTTP tracker and the
//! swarm reaper that removes inactive peers.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
