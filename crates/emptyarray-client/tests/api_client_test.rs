//! HTTP-level tests for the EmptyArray API client against a mock server.

use emptyarray_client::{ApiClient, ApiClientConfig};
use emptyarray_core::{Error, RemoteApi};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiClientConfig {
        base_url: server.uri(),
        timeout_seconds: Some(5),
        ..ApiClientConfig::default()
    })
    .expect("Failed to create client")
}

#[tokio::test]
async fn test_get_sends_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/inbox"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([{"title": "Call Bob"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let body = client_for(&mock_server)
        .get("/v1/inbox", "secret-token")
        .await
        .expect("Request should succeed");

    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed, serde_json::json!([{"title": "Call Bob"}]));
}

#[tokio::test]
async fn test_unauthorized_is_http_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/objects"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .get("/v1/objects", "")
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { endpoint, status } => {
            assert_eq!(endpoint, "/v1/objects");
            assert_eq!(status, 401);
        }
        other => panic!("Expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_body_is_not_returned() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/scheduled-items"))
        .respond_with(ResponseTemplate::new(503).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .get("/v1/scheduled-items", "tok")
        .await;

    assert!(matches!(
        result,
        Err(Error::HttpStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_non_json_success_body_is_returned_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/inbox"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let body = client_for(&mock_server).get("/v1/inbox", "tok").await.unwrap();
    assert_eq!(body, "not json");
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    let client = ApiClient::new(ApiClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: Some(2),
        ..ApiClientConfig::default()
    })
    .unwrap();

    let result = client.get("/v1/inbox", "tok").await;
    assert!(matches!(result, Err(Error::Request(_))));
}
