use torrust_swarm_tracker::servers::http::server::Stopped;
use torrust_tracker_test_helpers::configuration;

use crate::servers::http::environment::Environment;
use crate::servers::http::Started;

#[tokio::test]
async fn environment_should_be_started_and_stopped() {
    let env = Started::new(&configuration::ephemeral()).await;

    env.stop().await;
}

mod for_all_config_modes {

    mod receiving_an_announce_request {
        use std::net::{IpAddr, Ipv4Addr, SocketAddr, SocketAddrV4};
        use std::str::FromStr;

        use torrust_tracker_primitives::peer;
        use torrust_tracker_swarm_registry::AnnounceRequest;
        use torrust_tracker_test_helpers::configuration;

        use crate::common::fixtures::{invalid_info_hashes, sample_info_hash};
        use crate::servers::http::asserts::{
            assert_bad_announce_request_error_response, assert_failure_reason_contains,
            assert_missing_query_params_for_announce_request_error_response, assert_ok_text_plain,
        };
        use crate::servers::http::client::Client;
        use crate::servers::http::requests::announce::{Event, QueryBuilder};
        use crate::servers::http::responses::announce::{decode_compact_response, decode_verbose};
        use crate::servers::http::Started;

        /// A seeder registered directly on the tracker.
        fn a_seeder(listen_address: &str, peer_id: &str) -> (SocketAddr, AnnounceRequest) {
            let mut request = AnnounceRequest::new(sample_info_hash(), peer::Id::from(peer_id));
            request.left = 0;

            (SocketAddr::from_str(listen_address).unwrap(), request)
        }

        #[tokio::test]
        async fn should_respond_if_only_the_mandatory_fields_are_provided() {
            let env = Started::new(&configuration::ephemeral()).await;

            let response = Client::new(*env.bind_address())
                .announce(&QueryBuilder::default().query())
                .await;

            let announce = decode_verbose(&assert_ok_text_plain(response).await);

            assert_eq!(announce.complete, 0);
            assert_eq!(announce.incomplete, 1);
            assert!(announce.peers.is_empty());

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_the_url_query_component_is_empty() {
            let env = Started::new(&configuration::ephemeral()).await;

            let response = Client::new(*env.bind_address()).get("announce").await;

            assert_bad_announce_request_error_response(response, "missing query params for announce request").await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_a_mandatory_field_is_missing() {
            let env = Started::new(&configuration::ephemeral()).await;

            for param in ["info_hash", "port", "uploaded", "downloaded", "left"] {
                let response = Client::new(*env.bind_address())
                    .announce(&QueryBuilder::default().without_param(param).query())
                    .await;

                assert_missing_query_params_for_announce_request_error_response(response).await;
            }

            env.stop().await;
        }

        #[tokio::test]
        async fn should_accept_a_missing_peer_id() {
            let env = Started::new(&configuration::ephemeral()).await;

            let response = Client::new(*env.bind_address())
                .announce(&QueryBuilder::default().without_param("peer_id").query())
                .await;

            let announce = decode_verbose(&assert_ok_text_plain(response).await);

            assert_eq!(announce.incomplete, 1);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_the_info_hash_param_is_invalid() {
            let env = Started::new(&configuration::ephemeral()).await;

            for invalid_value in &invalid_info_hashes() {
                let response = Client::new(*env.bind_address())
                    .announce(&QueryBuilder::default().with_raw_param("info_hash", invalid_value).query())
                    .await;

                assert_bad_announce_request_error_response(response, "invalid param value").await;
            }

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_a_numeric_param_is_invalid() {
            let env = Started::new(&configuration::ephemeral()).await;

            for (param, invalid_value) in [("port", "65536"), ("left", "-1"), ("uploaded", "abc"), ("numwant", "x")] {
                let response = Client::new(*env.bind_address())
                    .announce(&QueryBuilder::default().with_raw_param(param, invalid_value).query())
                    .await;

                assert_bad_announce_request_error_response(response, &format!("invalid param value {invalid_value} for {param}"))
                    .await;
            }

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_the_configured_interval_and_tracker_id() {
            let config = configuration::ephemeral();
            let tracker_id = config.core.tracker_id.clone().unwrap();
            let env = Started::new(&config).await;

            let response = Client::new(*env.bind_address())
                .announce(&QueryBuilder::default().query())
                .await;

            let announce = decode_verbose(&assert_ok_text_plain(response).await);

            assert_eq!(announce.interval, 1800);
            assert_eq!(announce.tracker_id, tracker_id);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_accept_its_own_tracker_id_and_reject_a_foreign_one() {
            let config = configuration::ephemeral();
            let tracker_id = config.core.tracker_id.clone().unwrap();
            let env = Started::new(&config).await;
            let client = Client::new(*env.bind_address());

            let response = client
                .announce(&QueryBuilder::default().with_tracker_id(&tracker_id).query())
                .await;

            assert_eq!(decode_verbose(&assert_ok_text_plain(response).await).tracker_id, tracker_id);

            let response = client
                .announce(&QueryBuilder::default().with_tracker_id("another-tracker").query())
                .await;

            assert_failure_reason_contains(response, "incorrect tracker id").await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_the_list_of_previously_announced_peers() {
            let env = Started::new(&configuration::ephemeral()).await;

            let (listen_address, request) = a_seeder("126.0.0.1:8080", "-qB00000000000000002");
            env.add_torrent_peer(&listen_address, &request);

            let response = Client::new(*env.bind_address())
                .announce(&QueryBuilder::default().query())
                .await;

            let announce = decode_verbose(&assert_ok_text_plain(response).await);

            assert_eq!(announce.complete, 1);
            assert_eq!(announce.incomplete, 1);
            assert_eq!(announce.peers.len(), 1);
            assert_eq!(announce.peers[0].ip, "126.0.0.1");
            assert_eq!(announce.peers[0].port, "8080");
            assert_eq!(
                announce.peers[0].peer_id.as_deref().map(Vec::as_slice),
                Some(b"-qB00000000000000002".as_slice())
            );

            env.stop().await;
        }

        #[tokio::test]
        async fn should_omit_the_peer_ids_when_the_client_asks_for_no_peer_id() {
            let env = Started::new(&configuration::ephemeral()).await;

            let (listen_address, request) = a_seeder("126.0.0.1:8080", "-qB00000000000000002");
            env.add_torrent_peer(&listen_address, &request);

            let response = Client::new(*env.bind_address())
                .announce(&QueryBuilder::default().with_no_peer_id().query())
                .await;

            let announce = decode_verbose(&assert_ok_text_plain(response).await);

            assert_eq!(announce.peers.len(), 1);
            assert_eq!(announce.peers[0].peer_id, None);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_the_compact_list_of_previously_announced_peers() {
            let env = Started::new(&configuration::ephemeral()).await;

            let (listen_address, request) = a_seeder("126.0.0.1:8080", "-qB00000000000000002");
            env.add_torrent_peer(&listen_address, &request);

            let response = Client::new(*env.bind_address())
                .announce(&QueryBuilder::default().with_compact().query())
                .await;

            let announce = decode_compact_response(&assert_ok_text_plain(response).await);

            assert_eq!(
                announce.peer_addresses(),
                vec![SocketAddrV4::new(Ipv4Addr::new(126, 0, 0, 1), 8080)]
            );

            env.stop().await;
        }

        #[tokio::test]
        async fn should_not_return_more_peers_than_the_client_wants() {
            let env = Started::new(&configuration::ephemeral()).await;

            for port in 8080..8085 {
                let (listen_address, request) = a_seeder(&format!("126.0.0.1:{port}"), "-qB00000000000000002");
                env.add_torrent_peer(&listen_address, &request);
            }

            let response = Client::new(*env.bind_address())
                .announce(&QueryBuilder::default().with_numwant(2).query())
                .await;

            let announce = decode_verbose(&assert_ok_text_plain(response).await);

            assert_eq!(announce.complete, 5);
            assert_eq!(announce.peers.len(), 2);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_remove_a_stopped_peer_and_return_no_peers_to_it() {
            let env = Started::new(&configuration::ephemeral()).await;
            let client = Client::new(*env.bind_address());

            let (listen_address, request) = a_seeder("126.0.0.1:8080", "-qB00000000000000002");
            env.add_torrent_peer(&listen_address, &request);

            client.announce(&QueryBuilder::default().query()).await;

            let response = client
                .announce(&QueryBuilder::default().with_event(&Event::Stopped).query())
                .await;

            let announce = decode_verbose(&assert_ok_text_plain(response).await);

            assert_eq!(announce.complete, 1);
            assert_eq!(announce.incomplete, 0);
            assert!(announce.peers.is_empty());

            env.stop().await;
        }

        #[tokio::test]
        async fn should_count_a_completed_download() {
            let env = Started::new(&configuration::ephemeral()).await;

            Client::new(*env.bind_address())
                .announce(&QueryBuilder::default().with_left(0).with_event(&Event::Completed).query())
                .await;

            let metadata = &env.tracker.scrape(&[sample_info_hash()]).files[&sample_info_hash()];

            assert_eq!(metadata.complete, 1);
            assert_eq!(metadata.downloaded, 1);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_use_the_ip_param_as_the_peer_address() {
            let env = Started::new(&configuration::ephemeral()).await;
            let client = Client::new(*env.bind_address());

            let announced_ip = IpAddr::V4(Ipv4Addr::new(2, 137, 87, 41));

            client
                .announce(
                    &QueryBuilder::default()
                        .with_peer_id(b"-qB00000000000000002")
                        .with_ip(&announced_ip)
                        .with_port(6881)
                        .query(),
                )
                .await;

            let response = client.announce(&QueryBuilder::default().query()).await;

            let announce = decode_verbose(&assert_ok_text_plain(response).await);

            assert_eq!(announce.peers.len(), 1);
            assert_eq!(announce.peers[0].ip, "2.137.87.41");
            assert_eq!(announce.peers[0].port, "6881");

            env.stop().await;
        }

        #[tokio::test]
        async fn should_use_the_connection_ip_when_the_tracker_is_not_on_a_reverse_proxy() {
            let env = Started::new(&configuration::ephemeral()).await;
            let client = Client::bind(*env.bind_address(), IpAddr::V4(Ipv4Addr::LOCALHOST));

            client
                .announce_with_header(
                    &QueryBuilder::default().with_peer_id(b"-qB00000000000000002").with_port(6881).query(),
                    "X-Forwarded-For",
                    "150.172.238.178",
                )
                .await;

            let response = client.announce(&QueryBuilder::default().query()).await;

            let announce = decode_verbose(&assert_ok_text_plain(response).await);

            assert_eq!(announce.peers[0].ip, "127.0.0.1");

            env.stop().await;
        }
    }

    mod receiving_a_scrape_request {
        use torrust_tracker_configuration::Torrent;
        use torrust_tracker_test_helpers::configuration;

        use crate::common::fixtures::{another_info_hash, sample_info_hash};
        use crate::servers::http::asserts::{assert_bad_scrape_request_error_response, assert_ok_text_plain};
        use crate::servers::http::client::Client;
        use crate::servers::http::requests;
        use crate::servers::http::requests::scrape::QueryBuilder;
        use crate::servers::http::responses::scrape::{decode, File};
        use crate::servers::http::Started;

        #[tokio::test]
        async fn should_return_an_empty_file_list_when_the_tracker_has_no_swarms() {
            let env = Started::new(&configuration::ephemeral()).await;

            let response = Client::new(*env.bind_address()).get("scrape").await;

            let body = assert_ok_text_plain(response).await;

            assert_eq!(body, b"d5:filesdee");

            env.stop().await;
        }

        #[tokio::test]
        async fn should_fail_when_an_info_hash_param_is_invalid() {
            let env = Started::new(&configuration::ephemeral()).await;

            let response = Client::new(*env.bind_address())
                .scrape(&QueryBuilder::default().add_raw_info_hash("INVALID").query())
                .await;

            assert_bad_scrape_request_error_response(response, "invalid param value INVALID for info_hash").await;

            env.stop().await;
        }

        #[tokio::test]
        async fn should_return_every_swarm_when_no_info_hash_is_given() {
            let env = Started::new(&configuration::ephemeral()).await;
            let client = Client::new(*env.bind_address());

            client
                .announce(&requests::announce::QueryBuilder::new(&sample_info_hash()).query())
                .await;
            client
                .announce(&requests::announce::QueryBuilder::new(&another_info_hash()).with_left(0).query())
                .await;

            let scrape = decode(&assert_ok_text_plain(client.scrape(&QueryBuilder::default().query()).await).await);

            assert_eq!(scrape.files.len(), 2);
            assert_eq!(
                *scrape.file(&sample_info_hash()),
                File {
                    complete: 0,
                    downloaded: 0,
                    incomplete: 1,
                    name: Some(sample_info_hash().to_hex_string()),
                }
            );
            assert_eq!(scrape.file(&another_info_hash()).complete, 1);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_only_return_the_requested_swarms_the_tracker_knows() {
            let env = Started::new(&configuration::ephemeral()).await;
            let client = Client::new(*env.bind_address());

            client
                .announce(&requests::announce::QueryBuilder::new(&sample_info_hash()).query())
                .await;
            client
                .announce(&requests::announce::QueryBuilder::new(&another_info_hash()).query())
                .await;

            let response = client
                .scrape(
                    &QueryBuilder::default()
                        .add_info_hash(&sample_info_hash())
                        .add_raw_info_hash("%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF%FF")
                        .query(),
                )
                .await;

            let scrape = decode(&assert_ok_text_plain(response).await);

            assert_eq!(scrape.files.len(), 1);
            assert_eq!(scrape.file(&sample_info_hash()).incomplete, 1);

            env.stop().await;
        }

        #[tokio::test]
        async fn should_include_the_configured_torrents_with_their_names() {
            let mut config = configuration::ephemeral();
            config.torrents = vec![Torrent {
                info_hash: sample_info_hash(),
                name: "ubuntu-24.04-desktop-amd64.iso".to_owned(),
            }];
            let env = Started::new(&config).await;

            let response = Client::new(*env.bind_address())
                .scrape(&QueryBuilder::default().add_info_hash(&sample_info_hash()).query())
                .await;

            let scrape = decode(&assert_ok_text_plain(response).await);

            assert_eq!(
                *scrape.file(&sample_info_hash()),
                File {
                    name: Some("ubuntu-24.04-desktop-amd64.iso".to_owned()),
                    ..Default::default()
                }
            );

            env.stop().await;
        }
    }
}

mod configured_with_a_custom_announce_path {
    use torrust_tracker_test_helpers::configuration;

    use crate::common::fixtures::sample_info_hash;
    use crate::servers::http::asserts::assert_ok_text_plain;
    use crate::servers::http::client::Client;
    use crate::servers::http::requests::announce::QueryBuilder;
    use crate::servers::http::responses::{announce, scrape};
    use crate::servers::http::Started;

    #[tokio::test]
    async fn should_serve_announce_and_scrape_on_the_derived_paths() {
        let env = Started::new(&configuration::ephemeral_with_announce_path("/tracker/announce.php")).await;
        let client = Client::new(*env.bind_address());

        let response = client
            .get(&format!("tracker/announce.php?{}", QueryBuilder::default().query()))
            .await;

        assert_eq!(announce::decode_verbose(&assert_ok_text_plain(response).await).incomplete, 1);

        let response = client.get("tracker/scrape.php").await;

        assert_eq!(
            scrape::decode(&assert_ok_text_plain(response).await)
                .file(&sample_info_hash())
                .incomplete,
            1
        );

        assert_eq!(client.get("announce").await.status(), 404);

        env.stop().await;
    }

    #[tokio::test]
    async fn should_not_serve_a_scrape_route_when_none_can_be_derived() {
        let env = Started::new(&configuration::ephemeral_with_announce_path("/tracker")).await;

        let response = Client::new(*env.bind_address()).get("scrape").await;

        assert_eq!(response.status(), 404);

        env.stop().await;
    }
}

mod configured_as_behind_a_reverse_proxy {
    use torrust_tracker_test_helpers::configuration;

    use crate::servers::http::asserts::{
        assert_could_not_find_remote_address_on_x_forwarded_for_header_error_response, assert_ok_text_plain,
    };
    use crate::servers::http::client::Client;
    use crate::servers::http::requests::announce::QueryBuilder;
    use crate::servers::http::responses::announce::decode_verbose;
    use crate::servers::http::Started;

    #[tokio::test]
    async fn should_fail_when_the_request_is_missing_the_x_forwarded_for_header() {
        let env = Started::new(&configuration::ephemeral_with_reverse_proxy()).await;

        let response = Client::new(*env.bind_address())
            .announce(&QueryBuilder::default().query())
            .await;

        assert_could_not_find_remote_address_on_x_forwarded_for_header_error_response(response).await;

        env.stop().await;
    }

    #[tokio::test]
    async fn should_use_the_right_most_x_forwarded_for_ip_as_the_peer_address() {
        let env = Started::new(&configuration::ephemeral_with_reverse_proxy()).await;
        let client = Client::new(*env.bind_address());

        client
            .announce_with_header(
                &QueryBuilder::default().with_peer_id(b"-qB00000000000000002").query(),
                "X-Forwarded-For",
                "203.0.113.195, 150.172.238.178",
            )
            .await;

        let response = client
            .announce_with_header(&QueryBuilder::default().query(), "X-Forwarded-For", "150.172.238.179")
            .await;

        let announce = decode_verbose(&assert_ok_text_plain(response).await);

        assert_eq!(announce.peers.len(), 1);
        assert_eq!(announce.peers[0].ip, "150.172.238.178");

        env.stop().await;
    }
}

#[tokio::test]
async fn a_stopped_environment_should_be_restartable() {
    let env = Environment::<Stopped>::new(&configuration::ephemeral());

    let env = env.start().await.stop().await;

    env.start().await.stop().await;
}
