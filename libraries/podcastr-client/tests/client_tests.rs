//! Tests for the episode API client and page assembly.
//!
//! These tests use mock servers to verify client behavior without
//! requiring the json-server mock to be running.

use podcastr_client::{
    ClientConfig, ClientError, EpisodeApiClient, EpisodePage, EpisodeQuery, HomePage,
};
use podcastr_core::{CoreError, EpisodeId};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Helpers
// =============================================================================

fn record(id: &str, published_at: &str, duration: Value) -> Value {
    json!({
        "id": id,
        "title": format!("Faladev {}", id),
        "members": "Diego Fernandes e Richard",
        "published_at": published_at,
        "thumbnail": format!("https://example.com/{}.jpg", id),
        "description": "<p>Descrição</p>",
        "file": {
            "url": format!("https://example.com/{}.m4a", id),
            "type": "audio/x-m4a",
            "duration": duration
        }
    })
}

fn five_records() -> Value {
    json!([
        record("e0", "2021-01-22 19:00:00", json!(3981)),
        record("e1", "2021-01-21 19:00:00", json!(3600)),
        record("e2", "2021-01-20 19:00:00", json!("1800")),
        record("e3", "2021-01-15 19:00:00", json!(2700.9)),
        record("e4", "2021-01-08 19:00:00", json!(60)),
    ])
}

async fn client_for(server: &MockServer) -> (EpisodeApiClient, ClientConfig) {
    let config = ClientConfig::new(server.uri());
    let client = EpisodeApiClient::new(config.clone()).unwrap();
    (client, config)
}

// =============================================================================
// Listing
// =============================================================================

mod listing {
    use super::*;

    #[tokio::test]
    async fn test_list_sends_json_server_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "12"))
            .and(query_param("_sort", "published_at"))
            .and(query_param("_order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(five_records()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server).await;
        let episodes = client.list_episodes(&EpisodeQuery::latest(12)).await.unwrap();

        assert_eq!(episodes.len(), 5);
        assert_eq!(episodes[0].id, "e0");
        assert_eq!(episodes[2].file.as_ref().unwrap().duration, json!("1800"));
    }

    #[tokio::test]
    async fn test_list_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server).await;
        let result = client.list_episodes(&EpisodeQuery::default()).await;

        match result.unwrap_err() {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("Internal Server Error"));
            }
            e => panic!("Expected ServerError, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_list_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server).await;
        let result = client.list_episodes(&EpisodeQuery::default()).await;

        assert!(matches!(result, Err(ClientError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let client = EpisodeApiClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let result = client.list_episodes(&EpisodeQuery::default()).await;

        assert!(matches!(result, Err(ClientError::Request(_))));
    }
}

// =============================================================================
// Single episode
// =============================================================================

mod single_episode {
    use super::*;

    #[tokio::test]
    async fn test_get_episode() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/e0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(record(
                "e0",
                "2021-01-22 19:00:00",
                json!(3981),
            )))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server).await;
        let page = EpisodePage::load(&client, &EpisodeId::new("e0")).await.unwrap();

        assert_eq!(page.episode.title, "Faladev e0");
        assert_eq!(page.episode.published_at_label(), "22 jan 21");
        assert_eq!(page.episode.duration_label(), "01:06:21");
        assert_eq!(page.playable().url, "https://example.com/e0.m4a");
    }

    #[tokio::test]
    async fn test_get_episode_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server).await;
        let result = client.get_episode(&EpisodeId::new("missing")).await;

        match result.unwrap_err() {
            ClientError::NotFound(id) => assert_eq!(id, "missing"),
            e => panic!("Expected NotFound, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_episode_with_bad_duration_is_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/bad"))
            .respond_with(ResponseTemplate::new(200).set_body_json(record(
                "bad",
                "2021-01-22 19:00:00",
                json!("about an hour"),
            )))
            .mount(&mock_server)
            .await;

        let (client, _) = client_for(&mock_server).await;
        let result = EpisodePage::load(&client, &EpisodeId::new("bad")).await;

        assert!(matches!(
            result,
            Err(ClientError::Episode(CoreError::InvalidDuration(_)))
        ));
    }
}

// =============================================================================
// Pages
// =============================================================================

mod pages {
    use super::*;

    #[tokio::test]
    async fn test_home_page_splits_latest() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(five_records()))
            .mount(&mock_server)
            .await;

        let (client, config) = client_for(&mock_server).await;
        let home = HomePage::load(&client, &config).await.unwrap();

        assert_eq!(home.latest.len(), 2);
        assert_eq!(home.all.len(), 3);
        assert_eq!(home.latest[0].id.as_str(), "e0");
        assert_eq!(home.all[1].duration, 2700);

        let playlist = home.playlist();
        assert_eq!(playlist.len(), 5);
        assert_eq!(playlist[home.play_from_all(0).unwrap()].id.as_str(), "e2");
    }

    #[tokio::test]
    async fn test_static_paths_fetch_latest_only() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                record("e0", "2021-01-22 19:00:00", json!(1)),
                record("e1", "2021-01-21 19:00:00", json!(1)),
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (client, config) = client_for(&mock_server).await;
        let ids = EpisodePage::static_paths(&client, &config).await.unwrap();

        assert_eq!(ids, vec![EpisodeId::new("e0"), EpisodeId::new("e1")]);
    }

    #[tokio::test]
    async fn test_home_page_fails_on_bad_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                record("e0", "yesterday", json!(1)),
            ])))
            .mount(&mock_server)
            .await;

        let (client, config) = client_for(&mock_server).await;
        let result = HomePage::load(&client, &config).await;

        assert!(matches!(
            result,
            Err(ClientError::Episode(CoreError::InvalidDate(_)))
        ));
    }
}
