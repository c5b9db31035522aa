//! HTTP client tests for both content backends.
//!
//! These tests use mock servers to verify the clients without a running
//! scraper or a public Invidious instance.

use serde_json::json;
use tubecli::backend::{InvidiousClient, LocalClient, LocalProvider, RemoteProvider};
use tubecli::error::BackendError;
use tubecli::resolver::ContentResolver;
use tubecli::types::InfoSource;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn local_body() -> serde_json::Value {
    json!({
        "id": "PLlocal",
        "url": "https://www.youtube.com/playlist?list=PLlocal",
        "title": "Scraped Playlist",
        "description": "from the scraper",
        "views": "1,234 views",
        "total_items": 2,
        "last_updated": "Last updated on Jan 5, 2021",
        "author": {
            "name": "Owner",
            "avatar": "https://img/owner.jpg",
            "id": "UCowner",
            "ref": "https://www.youtube.com/channel/UCowner"
        },
        "items": [
            {
                "id": "vid1",
                "title": "First",
                "url_simple": "https://www.youtube.com/watch?v=vid1",
                "thumbnail": "https://img/vid1.jpg",
                "duration": "3:05",
                "author": {
                    "name": "Chan",
                    "ref": "https://www.youtube.com/user/chanuser"
                }
            },
            {
                "id": "vid2",
                "title": "Second",
                "duration": null,
                "author": null
            }
        ]
    })
}

fn remote_page(page: u64, ids: &[&str], total: u64) -> serde_json::Value {
    json!({
        "type": "playlist",
        "playlistId": "PLremote",
        "title": "Invidious Playlist",
        "description": "",
        "author": "Owner",
        "authorId": "UCowner",
        "authorThumbnails": [
            { "url": "https://img/32.jpg", "width": 32, "height": 32 },
            { "url": "https://img/48.jpg", "width": 48, "height": 48 },
            { "url": "https://img/76.jpg", "width": 76, "height": 76 }
        ],
        "viewCount": 4321,
        "videoCount": total,
        "updated": 1_609_459_200,
        "videos": ids.iter().enumerate().map(|(i, id)| json!({
            "title": format!("Video {}", id),
            "videoId": id,
            "author": "Chan",
            "authorId": "UCchan",
            "index": (page - 1) * 2 + i as u64,
            "lengthSeconds": 100
        })).collect::<Vec<_>>()
    })
}

mod local_client {
    use super::*;

    #[tokio::test]
    async fn test_fetches_playlist() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlist/PLlocal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(local_body()))
            .mount(&mock_server)
            .await;

        let client = LocalClient::new(mock_server.uri());
        let resp = client.get_playlist_info("PLlocal").await.unwrap();

        assert_eq!(resp.title, "Scraped Playlist");
        assert_eq!(resp.items.len(), 2);
        assert!(resp.items[1].author.is_none());
        assert!(resp.items[0].extra.contains_key("url_simple"));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlist/PLlocal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(local_body()))
            .mount(&mock_server)
            .await;

        let client = LocalClient::new(format!("{}/", mock_server.uri()));
        assert!(client.get_playlist_info("PLlocal").await.is_ok());
    }

    #[tokio::test]
    async fn test_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlist/PLlocal"))
            .respond_with(ResponseTemplate::new(503).set_body_string("scraper busy"))
            .mount(&mock_server)
            .await;

        let client = LocalClient::new(mock_server.uri());

        match client.get_playlist_info("PLlocal").await.unwrap_err() {
            BackendError::Api { status, message } => {
                assert_eq!(status, 503);
                assert!(message.contains("scraper busy"));
            }
            e => panic!("Expected Api error, got: {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlist/PLlocal"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
            .mount(&mock_server)
            .await;

        let client = LocalClient::new(mock_server.uri());

        assert!(matches!(
            client.get_playlist_info("PLlocal").await,
            Err(BackendError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_scraper() {
        // nothing listens on port 9 (discard) in the test environment
        let client = LocalClient::new("http://127.0.0.1:9");

        assert!(matches!(
            client.get_playlist_info("PLlocal").await,
            Err(BackendError::Http(_))
        ));
    }
}

mod invidious_client {
    use super::*;

    #[tokio::test]
    async fn test_requests_the_given_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/playlists/PLremote"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(remote_page(2, &["c", "d"], 4)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = InvidiousClient::new(mock_server.uri());
        let page = client.get_playlist_page("PLremote", 2).await.unwrap();

        assert_eq!(page.video_count, 4);
        assert_eq!(page.videos.len(), 2);
        assert_eq!(page.videos[0].video_id, "c");
        assert!(page.videos[0].extra.contains_key("index"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/playlists/PLgone"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "error": "Playlist does not exist." })),
            )
            .mount(&mock_server)
            .await;

        let client = InvidiousClient::new(mock_server.uri());

        match client.get_playlist_page("PLgone", 1).await.unwrap_err() {
            BackendError::Api { status, message } => {
                assert_eq!(status, 404);
                assert!(message.contains("does not exist"));
            }
            e => panic!("Expected Api error, got: {:?}", e),
        }
    }
}

mod end_to_end {
    use super::*;

    #[tokio::test]
    async fn test_scraper_down_falls_back_to_invidious_pages() {
        let scraper = MockServer::start().await;
        let invidious = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlist/PLremote"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&scraper)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/playlists/PLremote"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(remote_page(1, &["a", "b"], 3)),
            )
            .expect(1)
            .mount(&invidious)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/playlists/PLremote"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(remote_page(2, &["c"], 3)))
            .expect(1)
            .mount(&invidious)
            .await;

        let resolver = ContentResolver::new(
            LocalClient::new(scraper.uri()),
            InvidiousClient::new(invidious.uri()),
        );

        let view = resolver
            .resolve_playlist("PLremote", InfoSource::Local, true)
            .await
            .unwrap();

        assert_eq!(view.info_source, InfoSource::Remote);
        let ids: Vec<&str> = view.items.iter().map(|i| i.video_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(view.channel_thumbnail_url, "https://img/76.jpg");
        assert_eq!(view.last_updated, "Jan 2nd, 2021");
        assert_eq!(view.view_count, 4321);
    }

    #[tokio::test]
    async fn test_scraper_result_is_normalized() {
        let scraper = MockServer::start().await;
        let invidious = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlist/PLlocal"))
            .respond_with(ResponseTemplate::new(200).set_body_json(local_body()))
            .mount(&scraper)
            .await;

        let resolver = ContentResolver::new(
            LocalClient::new(scraper.uri()),
            InvidiousClient::new(invidious.uri()),
        );

        let view = resolver
            .resolve_playlist("PLlocal", InfoSource::Local, false)
            .await
            .unwrap();

        assert_eq!(view.info_source, InfoSource::Local);
        assert_eq!(view.view_count, 1234);
        assert_eq!(view.channel_id, "UCowner");
        assert_eq!(view.items[0].author_id, "chanuser");
        assert_eq!(view.items[0].length_seconds, 185);
        assert_eq!(view.items[1].author, "");
        assert_eq!(view.items[1].length_seconds, 0);
        assert_eq!(view.last_updated, "Last updated on Jan 5, 2021");
    }
}
