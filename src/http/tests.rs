//! Tests for the HTTP client module

use super::*;
use crate::auth::Session;
use crate::config::Settings;
use crate::error::Error;
use crate::types::DeploymentMode;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(base_url: &str, mode: DeploymentMode) -> Session {
    Session {
        token: "test-token".to_string(),
        base_url: base_url.to_string(),
        mode,
    }
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.bearer_token.is_none());
    assert!(!config.accept_invalid_certs);
    assert_eq!(
        config.default_headers.get("Accept"),
        Some(&"application/json".to_string())
    );
    assert_eq!(
        config.default_headers.get("Content-type"),
        Some(&"application/json".to_string())
    );
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://leader.example.com:9000")
        .timeout(Duration::from_secs(5))
        .bearer_token("abc")
        .accept_invalid_certs(true)
        .build();

    assert_eq!(
        config.base_url,
        Some("https://leader.example.com:9000".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert!(config.user_agent.starts_with("dataflow-audit/"));
    assert_eq!(config.bearer_token.as_deref(), Some("abc"));
    assert!(config.accept_invalid_certs);
}

#[test]
fn test_debug_hides_token() {
    let config = HttpClientConfig::builder().bearer_token("super-secret").build();
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("has_bearer_token: true"));
}

#[test]
fn test_tls_policy_follows_mode() {
    let settings = Settings::default();

    let onprem = HttpClient::for_session(&session("https://leader:9000", DeploymentMode::OnPrem), &settings)
        .unwrap();
    assert!(onprem.config().accept_invalid_certs);

    let cloud = HttpClient::for_session(&session("https://ws.cribl.cloud", DeploymentMode::Cloud), &settings)
        .unwrap();
    assert!(!cloud.config().accept_invalid_certs);

    let strict = Settings {
        onprem_accept_invalid_certs: false,
        ..Settings::default()
    };
    let onprem_strict = HttpClient::for_session(&session("https://leader:9000", DeploymentMode::OnPrem), &strict)
        .unwrap();
    assert!(!onprem_strict.config().accept_invalid_certs);
}

#[tokio::test]
async fn test_session_client_sends_bearer_and_json_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/master/groups"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("Accept", "application/json"))
        .and(header("Content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::for_session(
        &session(&mock_server.uri(), DeploymentMode::OnPrem),
        &Settings::default(),
    )
    .unwrap();

    let body: serde_json::Value = client.get_json("/api/v1/master/groups").await.unwrap();
    assert_eq!(body["items"], json!([]));
}

#[tokio::test]
async fn test_base_url_join_tolerates_slashes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/m/default/routes"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    client.get("/api/v1/m/default/routes").await.unwrap();
    client.get("api/v1/m/default/routes").await.unwrap();
}

#[tokio::test]
async fn test_only_200_counts_as_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/master/groups"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .get_json::<serde_json::Value>("/api/v1/master/groups")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 202, .. }), "{err:?}");
}

#[tokio::test]
async fn test_non_success_status_is_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/m/broken/routes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.get("/api/v1/m/broken/routes").await.unwrap_err();
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_json_bad_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().base_url(mock_server.uri()).build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client
        .get_json::<serde_json::Value>("/api/v1/garbage")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
    assert!(err.is_group_degradable());
}
