//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: request builder → HTTP requests with auth
//! → pagination → resources out.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yt_data::auth::AuthConfig;
use yt_data::error::Error;
use yt_data::{ChannelsList, PlaylistItemsList, VideosList, YouTube};

fn client_for(server: &MockServer) -> YouTube {
    YouTube::with_base_url(
        server.uri(),
        AuthConfig::ApiKey {
            key: "AIzaTest".to_string(),
        },
    )
}

fn playlist_entry(video_id: Option<&str>) -> serde_json::Value {
    match video_id {
        Some(id) => json!({"contentDetails": {"videoId": id}}),
        None => json!({"contentDetails": {}}),
    }
}

// ============================================================================
// Pagination end to end
// ============================================================================

#[tokio::test]
async fn test_paginated_listing_with_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("key", "AIzaTest"))
        .and(query_param("playlistId", "PL123"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#playlistItemListResponse",
            "items": [playlist_entry(Some("v1")), playlist_entry(Some("v2"))],
            "nextPageToken": "t1",
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("key", "AIzaTest"))
        .and(query_param("pageToken", "t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#playlistItemListResponse",
            "items": [playlist_entry(Some("v3"))],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids = client
        .playlist_item_video_ids("PL123", None)
        .await
        .unwrap();

    assert_eq!(ids, vec!["v1", "v2", "v3"]);
}

#[tokio::test]
async fn test_limit_stops_fetching_further_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [playlist_entry(Some("v1")), playlist_entry(Some("v2"))],
            "nextPageToken": "t1",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids = client
        .playlist_item_video_ids("PL123", Some(2))
        .await
        .unwrap();

    assert_eq!(ids, vec!["v1", "v2"]);
    // The cap was met on page one; the continuation must not be followed.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_entries_without_video_id_are_skipped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                playlist_entry(Some("v1")),
                playlist_entry(None),
                playlist_entry(Some("v3")),
            ],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids = client
        .playlist_item_video_ids("PL123", None)
        .await
        .unwrap();

    assert_eq!(ids, vec!["v1", "v3"]);
}

#[tokio::test]
async fn test_collect_via_list_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "snippet"))
        .and(query_param("chart", "mostPopular"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "v1", "snippet": {"title": "one"}},
                {"id": "v2", "snippet": {"title": "two"}},
            ],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = VideosList::new().most_popular();
    let items = client.list(&request).collect().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "v1");
}

// ============================================================================
// Error classes
// ============================================================================

#[tokio::test]
async fn test_api_error_envelope_is_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{"reason": "quotaExceeded"}],
                "status": "PERMISSION_DENIED",
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.video_title("v1").await.unwrap_err();

    assert!(err.is_transport());
    assert!(!err.is_shape_mismatch());
    match err {
        Error::Api { status, reason, .. } => {
            assert_eq!(status, 403);
            assert_eq!(reason.as_deref(), Some("quotaExceeded"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_response_without_items_is_shape_mismatch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#playlistItemListResponse",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = PlaylistItemsList::new("PL123");
    let err = client.list(&request).collect().await.unwrap_err();

    assert!(err.is_shape_mismatch());
    assert!(matches!(err, Error::MissingField { .. }));
}

#[tokio::test]
async fn test_one_with_no_matches_is_empty_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.channel_title("UCmissing").await.unwrap_err();

    assert!(err.is_shape_mismatch());
    assert!(matches!(err, Error::EmptyItems { .. }));
}

// ============================================================================
// Convenience accessors
// ============================================================================

#[tokio::test]
async fn test_channel_title_and_hidden_subscriber_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("part", "snippet"))
        .and(query_param("id", "UCabc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "UCabc", "snippet": {"title": "Some Creator"}}],
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("part", "statistics"))
        .and(query_param("id", "UCabc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            // hiddenSubscriberCount channels omit the counter entirely
            "items": [{"id": "UCabc", "statistics": {"hiddenSubscriberCount": true}}],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let title = client.channel_title("UCabc").await.unwrap();
    assert_eq!(title.as_deref(), Some("Some Creator"));

    let subscribers = client.channel_subscriber_count("UCabc").await.unwrap();
    assert_eq!(subscribers, None);
}

#[tokio::test]
async fn test_video_view_count_parses_numeric_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("part", "statistics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "v1", "statistics": {"viewCount": "1234567"}}],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let views = client.video_view_count("v1").await.unwrap();

    assert_eq!(views, Some(1_234_567));
}

#[tokio::test]
async fn test_channel_lookup_by_handle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("forHandle", "@somecreator"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "UCabc", "snippet": {"title": "Some Creator"}}],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ChannelsList::new().for_handle("@somecreator");
    let channel = client.one(&request).await.unwrap();

    assert_eq!(channel["id"], "UCabc");
}
