use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rstest::{fixture, rstest};
use torrust_tracker_clock::clock::stopped::Stopped as _;
use torrust_tracker_clock::clock::{self, Time as _};
use torrust_tracker_primitives::announce_event::AnnounceEvent;
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_swarm_registry::{Error, SwarmRegistry, TrackerId};

use crate::common::announcer::{a_leecher, a_seeder, Announcer};
use crate::CurrentClock;

fn info_hash(i: u8) -> InfoHash {
    InfoHash::from([i; 20])
}

fn announce(registry: &SwarmRegistry, announcer: &Announcer) {
    registry
        .process_announce(CurrentClock::now(), &announcer.listen_address, &announcer.request)
        .expect("it should accept the announce");
}

#[fixture]
fn empty() -> SwarmRegistry {
    SwarmRegistry::new(TrackerId::from("integration-tracker"))
}

#[fixture]
fn registered() -> SwarmRegistry {
    let registry = empty();
    registry.register_swarm(&info_hash(1), "one").unwrap();
    registry.register_swarm(&info_hash(2), "two").unwrap();
    registry.register_swarm(&info_hash(3), "").unwrap();
    registry
}

#[fixture]
fn announced() -> SwarmRegistry {
    let registry = empty();
    announce(&registry, &a_seeder(info_hash(1), 1));
    announce(&registry, &a_leecher(info_hash(1), 2));
    announce(&registry, &a_leecher(info_hash(2), 3));
    registry
}

#[fixture]
fn many() -> SwarmRegistry {
    let registry = empty();
    for i in 0..100 {
        announce(&registry, &a_leecher(info_hash(i), u16::from(i)));
    }
    registry
}

#[rstest]
#[case::empty(empty(), 0)]
#[case::registered(registered(), 3)]
#[case::announced(announced(), 2)]
#[case::many(many(), 100)]
fn scrape_without_info_hashes_should_return_every_swarm(#[case] registry: SwarmRegistry, #[case] expected: usize) {
    let scrape_data = registry.scrape(&[]);

    assert_eq!(scrape_data.len(), expected);
    assert_eq!(scrape_data.len(), registry.len());
}

#[rstest]
#[case::empty(empty())]
#[case::registered(registered())]
#[case::announced(announced())]
#[case::many(many())]
fn scrape_should_only_return_the_known_requested_info_hashes(#[case] registry: SwarmRegistry) {
    registry.register_swarm(&info_hash(200), "A").unwrap();

    let scrape_data = registry.scrape(&[info_hash(200), info_hash(255)]);

    assert_eq!(scrape_data.files.keys().copied().collect::<Vec<_>>(), vec![info_hash(200)]);
}

#[rstest]
#[case::empty(empty())]
#[case::registered(registered())]
#[case::announced(announced())]
#[case::many(many())]
fn explicit_registration_should_fail_for_every_known_swarm(#[case] registry: SwarmRegistry) {
    let known: Vec<InfoHash> = registry.scrape(&[]).files.into_keys().collect();

    for info_hash in known {
        assert!(matches!(
            registry.register_swarm(&info_hash, "duplicate"),
            Err(Error::AlreadyExists { .. })
        ));
    }
}

#[rstest]
#[case::empty(empty())]
#[case::registered(registered())]
#[case::announced(announced())]
#[case::many(many())]
fn reaping_should_keep_every_swarm(#[case] registry: SwarmRegistry) {
    let swarms = registry.len();

    registry.reap(CurrentClock::now() + Duration::from_secs(1));

    assert_eq!(registry.len(), swarms);
    assert!(registry
        .scrape(&[])
        .files
        .values()
        .all(|metadata| metadata.complete == 0 && metadata.incomplete == 0));
}

#[rstest]
#[case::registered(registered())]
#[case::announced(announced())]
#[case::many(many())]
fn unregistering_should_remove_only_that_swarm(#[case] registry: SwarmRegistry) {
    let swarms = registry.len();

    registry.unregister_swarm(&info_hash(1));
    registry.unregister_swarm(&info_hash(1));

    assert_eq!(registry.len(), swarms - 1);
    assert!(registry.swarm_metadata(&info_hash(1)).is_none());
}

#[test]
fn it_should_count_seeders_and_leechers_of_a_swarm() {
    let registry = empty();
    let hash = info_hash(7);

    announce(
        &registry,
        &Announcer::new(hash, "peerA", "1.2.3.4:6881".parse().unwrap()).with_bytes_left(1000),
    );
    announce(
        &registry,
        &Announcer::new(hash, "peerB", "5.6.7.8:6882".parse().unwrap()).with_bytes_left(0),
    );

    let metadata = &registry.scrape(&[hash]).files[&hash];

    assert_eq!((metadata.complete, metadata.incomplete), (1, 1));
}

#[test]
fn the_completed_counter_should_never_decrease() {
    let registry = empty();
    let hash = info_hash(7);
    let mut last = 0;

    for round in 0..5u16 {
        announce(&registry, &a_seeder(hash, round).with_event(AnnounceEvent::Completed));
        announce(&registry, &a_seeder(hash, round).with_event(AnnounceEvent::Stopped));
        registry.reap(CurrentClock::now() + Duration::from_secs(1));

        let downloaded = registry.swarm_metadata(&hash).unwrap().downloaded;
        assert!(downloaded > last);
        last = downloaded;
    }
}

#[test]
fn reaping_should_remove_exactly_the_peers_not_seen_since_the_deadline() {
    clock::Stopped::local_set(&Duration::from_secs(1_000));

    let registry = empty();
    let hash = info_hash(7);

    announce(&registry, &a_leecher(hash, 1));
    clock::Stopped::local_add(&Duration::from_secs(60)).unwrap();
    announce(&registry, &a_leecher(hash, 2));
    clock::Stopped::local_add(&Duration::from_secs(60)).unwrap();
    announce(&registry, &a_leecher(hash, 3));

    let removed = registry.reap(Duration::from_secs(1_060));

    assert_eq!(removed, 1);
    assert_eq!(registry.swarm_metadata(&hash).unwrap().incomplete, 2);

    clock::Stopped::local_reset();
}

#[test]
fn it_should_serialize_concurrent_announces() {
    let registry = Arc::new(empty());
    let hash = info_hash(7);

    let handles: Vec<_> = (0..8u16)
        .map(|worker| {
            let registry = registry.clone();
            thread::spawn(move || {
                for i in 0..50u16 {
                    let announcer = a_leecher(hash, worker * 50 + i).with_event(AnnounceEvent::Completed);
                    registry
                        .process_announce(Duration::ZERO, &announcer.listen_address, &announcer.request)
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let metadata = registry.swarm_metadata(&hash).unwrap();
    assert_eq!(metadata.incomplete, 400);
    assert_eq!(metadata.downloaded, 400);
}
