use std::time::Duration;

use torrust_tracker_clock::clock::stopped::Stopped as _;
use torrust_tracker_clock::clock::Time;

use crate::CurrentClock;

#[test]
fn the_stopped_clock_should_not_follow_the_system_time() {
    let before = CurrentClock::now();
    std::thread::sleep(Duration::from_millis(50));

    assert_eq!(CurrentClock::now(), before);
}

#[test]
fn the_stopped_clock_should_only_move_when_told_to() {
    CurrentClock::local_set(&Duration::from_secs(3600));
    CurrentClock::local_add(&Duration::from_secs(1800)).unwrap();

    assert_eq!(CurrentClock::now(), Duration::from_secs(5400));
    assert_eq!(CurrentClock::now_sub(&Duration::from_secs(3600)), Some(Duration::from_secs(1800)));

    CurrentClock::local_reset();
}
