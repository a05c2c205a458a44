use std::collections::HashSet;
use std::net::{IpAddr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use rstest::{fixture, rstest};
use torrust_tracker_primitives::announce_event::AnnounceEvent;
use torrust_tracker_primitives::info_hash::InfoHash;
use torrust_tracker_primitives::peer::{self, PeerKey};
use torrust_tracker_swarm_registry::encoding::decode_compact;
use torrust_tracker_swarm_registry::{Peers, Swarm};

use crate::common::announcer::{a_leecher, a_seeder, address, Announcer};

fn info_hash() -> InfoHash {
    InfoHash::from([7u8; 20])
}

fn announce(swarm: &mut Swarm, announcer: &Announcer) -> torrust_tracker_swarm_registry::AnnounceData {
    swarm
        .announce(Duration::ZERO, &announcer.listen_address, &announcer.request)
        .expect("it should accept the announce")
}

fn with_peers(count: u16) -> Swarm {
    let mut swarm = Swarm::new("");
    for i in 1..=count {
        if i % 2 == 0 {
            announce(&mut swarm, &a_seeder(info_hash(), i));
        } else {
            announce(&mut swarm, &a_leecher(info_hash(), i));
        }
    }
    swarm
}

#[fixture]
fn empty() -> Swarm {
    with_peers(0)
}

#[fixture]
fn one() -> Swarm {
    with_peers(1)
}

#[fixture]
fn ten() -> Swarm {
    with_peers(10)
}

#[fixture]
fn hundred() -> Swarm {
    with_peers(100)
}

fn requester() -> Announcer {
    Announcer::new(info_hash(), "requester", address(1000)).with_bytes_left(1)
}

#[rstest]
#[case::empty(empty())]
#[case::one(one())]
#[case::ten(ten())]
#[case::hundred(hundred())]
fn every_peer_should_be_keyed_by_its_listen_address(#[case] mut swarm: Swarm) {
    announce(&mut swarm, &requester());
    announce(&mut swarm, &requester().with_peer_id("requester-again"));

    assert!(swarm
        .peers()
        .iter()
        .all(|(key, record)| *key == PeerKey::from(record.listen_address)));
}

#[rstest]
#[case::empty(empty(), 0)]
#[case::one(one(), 1)]
#[case::ten(ten(), 10)]
#[case::hundred(hundred(), 50)]
fn num_want_above_the_limit_should_return_the_available_peers_up_to_fifty(
    #[case] mut swarm: Swarm,
    #[case] expected: usize,
) {
    let data = announce(&mut swarm, &requester().with_num_want(500));

    assert_eq!(data.peers.len(), expected);
}

#[rstest]
#[case::empty(empty())]
#[case::one(one())]
#[case::ten(ten())]
#[case::hundred(hundred())]
fn a_stopped_peer_should_leave_the_swarm_and_get_no_peers(#[case] mut swarm: Swarm) {
    announce(&mut swarm, &requester());

    let data = announce(&mut swarm, &requester().with_event(AnnounceEvent::Stopped));

    assert!(!swarm.peers().contains(&PeerKey::from(address(1000))));
    assert!(data.peers.is_empty());
}

#[rstest]
#[case::one(one())]
#[case::ten(ten())]
#[case::hundred(hundred())]
fn the_compact_peer_list_should_decode_to_distinct_swarm_peers(#[case] mut swarm: Swarm) {
    let data = announce(&mut swarm, &requester().compact());

    let Peers::Compact(bytes) = data.peers else {
        panic!("expected a compact peer list");
    };

    assert_eq!(bytes.len() % 6, 0);

    let decoded: Vec<SocketAddrV4> = decode_compact(&bytes).unwrap();
    let distinct: HashSet<&SocketAddrV4> = decoded.iter().collect();

    assert_eq!(distinct.len(), decoded.len());
    for peer_address in decoded {
        let key = PeerKey::from(SocketAddr::from(peer_address));
        assert!(swarm.peers().contains(&key));
        assert_ne!(key, PeerKey::from(address(1000)));
    }
}

#[rstest]
#[case::one(one())]
#[case::ten(ten())]
fn the_verbose_peer_list_should_carry_the_stored_peer_ids(#[case] mut swarm: Swarm) {
    let data = announce(&mut swarm, &requester());

    let Peers::Verbose(peers) = data.peers else {
        panic!("expected a verbose peer list");
    };

    for verbose in peers {
        let ip: IpAddr = verbose.ip.parse().unwrap();
        let port: u16 = verbose.port.parse().unwrap();
        let record = swarm.peers().get(&PeerKey::from(SocketAddr::new(ip, port))).unwrap();

        assert_eq!(verbose.peer_id.unwrap().into_vec(), record.id.as_bytes());
    }
}

#[test]
fn reannouncing_from_the_same_address_with_another_peer_id_should_replace_the_peer() {
    let mut swarm = Swarm::new("");
    let p1 = Announcer::new(info_hash(), "peerA", "1.2.3.4:6881".parse().unwrap()).with_bytes_left(1000);

    announce(&mut swarm, &p1);
    announce(&mut swarm, &p1.clone().with_peer_id("peerA2"));

    assert_eq!(swarm.peers().len(), 1);
    assert_eq!(
        swarm.peers().get(&PeerKey::from(p1.listen_address)).unwrap().id,
        peer::Id::from("peerA2")
    );
}

#[test]
fn a_peer_announcing_from_an_ipv4_address_and_its_ipv6_mapped_form_should_keep_a_single_slot() {
    let mut swarm = Swarm::new("");
    let ipv4 = Announcer::new(info_hash(), "peerA", "1.2.3.4:6881".parse().unwrap()).with_bytes_left(1000);
    let mapped = Announcer {
        listen_address: "[::ffff:1.2.3.4]:6881".parse().unwrap(),
        ..ipv4.clone()
    };

    announce(&mut swarm, &ipv4);
    let data = announce(&mut swarm, &mapped.compact());

    assert_eq!(swarm.peers().len(), 1);
    assert_eq!((data.complete, data.incomplete), (0, 1));
    assert!(data.peers.is_empty(), "the requester should not get its own address");

    let record = swarm.peers().get(&PeerKey::from(ipv4.listen_address)).unwrap();
    assert_eq!(record.listen_address, ipv4.listen_address);
}
