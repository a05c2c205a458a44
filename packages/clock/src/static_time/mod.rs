//! Time captured once, the first time it is read.
use std::time::SystemTime;

lazy_static! {
    /// The time the application started (first access to this static).
    pub static ref TIME_AT_APP_START: SystemTime = SystemTime::now();
}
