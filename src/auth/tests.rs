//! Tests for the auth module

use super::*;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_apply_none_leaves_request_untouched() {
    let client = reqwest::Client::new();
    let authenticator = Authenticator::new(AuthConfig::None);

    let req = authenticator
        .apply(client.get("https://example.com/videos"))
        .await
        .unwrap()
        .build()
        .unwrap();

    assert!(req.url().query().is_none());
    assert!(req.headers().get("authorization").is_none());
}

#[tokio::test]
async fn test_apply_api_key_adds_query_param() {
    let client = reqwest::Client::new();
    let authenticator = Authenticator::new(AuthConfig::ApiKey {
        key: "AIzaTest".to_string(),
    });

    let req = authenticator
        .apply(client.get("https://example.com/videos"))
        .await
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(req.url().query(), Some("key=AIzaTest"));
}

#[tokio::test]
async fn test_apply_bearer_sets_header() {
    let client = reqwest::Client::new();
    let authenticator = Authenticator::new(AuthConfig::Bearer {
        token: "ya29.token".to_string(),
    });

    let req = authenticator
        .apply(client.get("https://example.com/videos"))
        .await
        .unwrap()
        .build()
        .unwrap();

    let auth_header = req.headers().get("authorization").unwrap();
    assert_eq!(auth_header.to_str().unwrap(), "Bearer ya29.token");
}

#[tokio::test]
async fn test_oauth2_refresh_fetches_and_caches_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=1%2F%2Frefresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "ya29.fresh",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let authenticator = Authenticator::new(AuthConfig::Oauth2Refresh {
        token_url: Some(format!("{}/token", mock_server.uri())),
        client_id: "cid".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "1//refresh".to_string(),
    });

    // Two applies, one token request: the second hit is served from cache
    for _ in 0..2 {
        let req = authenticator
            .apply(client.get("https://example.com/videos"))
            .await
            .unwrap()
            .build()
            .unwrap();

        let auth_header = req.headers().get("authorization").unwrap();
        assert_eq!(auth_header.to_str().unwrap(), "Bearer ya29.fresh");
    }
}

#[tokio::test]
async fn test_oauth2_refresh_error_is_token_refresh() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant"
        })))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let authenticator = Authenticator::new(AuthConfig::Oauth2Refresh {
        token_url: Some(format!("{}/token", mock_server.uri())),
        client_id: "cid".to_string(),
        client_secret: "secret".to_string(),
        refresh_token: "stale".to_string(),
    });

    let err = authenticator
        .apply(client.get("https://example.com/videos"))
        .await
        .unwrap_err();

    assert!(matches!(err, crate::error::Error::TokenRefresh { .. }));
    assert!(err.is_transport());
    assert!(err.to_string().contains("invalid_grant"));
}
