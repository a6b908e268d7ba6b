//! Mock backend tests for the agris client.
//!
//! These tests use wiremock to simulate the backend and exercise the
//! client's auth, refresh, and decoding behavior without network access.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use agris_client::AgrisClient;
use agris_core::error::{AuthError, RefreshError};
use agris_core::{BaseUrl, Error, MemoryTokenStore, TokenPair, TokenStore};

/// Helper to create a base URL from a mock server.
fn mock_base_url(server: &MockServer) -> BaseUrl {
    BaseUrl::new(server.uri()).unwrap()
}

/// Client wired to the mock server with the given stored credentials.
fn client_with_tokens(server: &MockServer, access: &str, refresh: &str) -> AgrisClient {
    let store = Arc::new(MemoryTokenStore::new());
    store.set_tokens(TokenPair::new(access, refresh));
    AgrisClient::new(mock_base_url(server), store)
}

fn farm_json(id: Uuid) -> serde_json::Value {
    json!({
        "id": id,
        "name": "North Field",
        "total_area": 2.5,
        "area_unit": "acre",
        "lat": 11.0168,
        "lon": 76.9558,
        "created_at": "2024-06-01T08:30:00Z"
    })
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_verify_otp_stores_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify-otp"))
        .and(body_json(json!({
            "phone": "+919800000001",
            "otp": "123456"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "user": {"id": "4dcf5a5e-9d8f-4a7e-9a55-0d2a9fb1a111", "name": "Asha"},
            "access_token": "access-1",
            "refresh_token": "refresh-1"
        })))
        .mount(&server)
        .await;

    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let client = AgrisClient::new(mock_base_url(&server), Arc::clone(&store));

    let session = client.verify_otp("+919800000001", "123456").await.unwrap();

    assert_eq!(session.status, "success");
    assert_eq!(store.access_token().unwrap(), "access-1");
    assert_eq!(store.refresh_token().unwrap(), "refresh-1");
    assert_eq!(store.user().unwrap()["name"], "Asha");
}

#[tokio::test]
async fn test_verify_otp_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/verify-otp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Invalid or expired OTP"
        })))
        .mount(&server)
        .await;

    let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
    let client = AgrisClient::new(mock_base_url(&server), Arc::clone(&store));

    let err = client.verify_otp("+919800000001", "000000").await.unwrap_err();
    match err {
        Error::Api(e) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.detail.as_deref(), Some("Invalid or expired OTP"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(store.access_token().is_none());
}

#[tokio::test]
async fn test_authed_call_sends_bearer() {
    let server = MockServer::start().await;
    let farm_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/farms"))
        .and(header("authorization", "Bearer access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([farm_json(farm_id)])))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let farms = client.farms().await.unwrap();

    assert_eq!(farms.len(), 1);
    assert_eq!(farms[0].id, farm_id);
    assert_eq!(farms[0].name, "North Field");
}

#[tokio::test]
async fn test_authed_call_without_token_sends_no_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    // Empty store: the request must still go out, just without the header
    let store = Arc::new(MemoryTokenStore::new());
    let client = AgrisClient::new(mock_base_url(&server), store);
    let farms = client.farms().await.unwrap();
    assert!(farms.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_public_call_ignores_stored_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/request-otp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "otp_sent",
            "message": "OTP sent successfully"
        })))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let response = client.request_otp("+919800000001").await.unwrap().unwrap();
    assert_eq!(response.status, "otp_sent");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

// ============================================================================
// Refresh-and-Retry Tests
// ============================================================================

#[tokio::test]
async fn test_401_refreshes_and_retries_once() {
    let server = MockServer::start().await;
    let farm_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/farms"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refresh_token": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A2",
            "refresh_token": "R2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/farms"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([farm_json(farm_id)])))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1");
    let farms = client.farms().await.unwrap();

    assert_eq!(farms.len(), 1);
    let store = client.store();
    assert_eq!(store.access_token().unwrap(), "A2");
    assert_eq!(store.refresh_token().unwrap(), "R2");
}

#[tokio::test]
async fn test_retried_call_does_not_refresh_again() {
    let server = MockServer::start().await;

    // 401 regardless of which token is presented
    Mock::given(method("GET"))
        .and(path("/farms"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A2",
            "refresh_token": "R2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1");
    let err = client.farms().await.unwrap_err();

    // The retry's 401 is a plain API error, not another refresh cycle
    match err {
        Error::Api(e) => assert_eq!(e.status, 401),
        other => panic!("expected Api error, got {other:?}"),
    }
    // The successful refresh still replaced the stored pair
    assert_eq!(client.store().access_token().unwrap(), "A2");
}

#[tokio::test]
async fn test_refresh_rejection_clears_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farms"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Invalid refresh token"
        })))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1");
    let err = client.farms().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Auth(AuthError::Unauthorized(RefreshError::Rejected { status: 400 }))
    ));
    assert!(client.store().access_token().is_none());
    assert!(client.store().refresh_token().is_none());
}

#[tokio::test]
async fn test_refresh_response_missing_fields_clears_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farms"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A2"
        })))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1");
    let err = client.farms().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Auth(AuthError::Unauthorized(RefreshError::MalformedResponse))
    ));
    assert!(client.store().access_token().is_none());
}

#[tokio::test]
async fn test_401_without_refresh_token_fails_without_refresh_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farms"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = AgrisClient::new(mock_base_url(&server), store);
    let err = client.farms().await.unwrap_err();

    assert!(matches!(
        err,
        Error::Auth(AuthError::Unauthorized(RefreshError::NoRefreshToken))
    ));
}

#[tokio::test]
async fn test_concurrent_401s_share_a_single_refresh() {
    let server = MockServer::start().await;
    let farm_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/farms"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dashboard/farm-summary"))
        .and(query_param("farmId", farm_id.to_string()))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    // Slow refresh so both calls observe the in-flight state
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refresh_token": "R1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({
                    "access_token": "A2",
                    "refresh_token": "R2"
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/farms"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([farm_json(farm_id)])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/dashboard/farm-summary"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "farm_id": farm_id,
            "total_expense": 1500.0,
            "total_income": 4200.0,
            "net_profit": 2700.0,
            "profit_status": "profit",
            "profit_percentage": 180.0
        })))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1");

    let (farms, summary) = tokio::join!(client.farms(), client.farm_summary(farm_id));

    assert_eq!(farms.unwrap().len(), 1);
    let summary = summary.unwrap().unwrap();
    assert_eq!(summary.net_profit, 2700.0);
    assert_eq!(client.store().access_token().unwrap(), "A2");
}

#[tokio::test]
async fn test_refresh_timeout_fails_all_waiters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farms"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(5))
                .set_body_json(json!({
                    "access_token": "A2",
                    "refresh_token": "R2"
                })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set_tokens(TokenPair::new("A1", "R1"));
    let client = AgrisClient::with_refresh_timeout(
        mock_base_url(&server),
        store,
        Duration::from_millis(100),
    );

    let err = client.farms().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Auth(AuthError::Unauthorized(RefreshError::TimedOut))
    ));
    assert!(client.store().access_token().is_none());
}

// ============================================================================
// Response Decoding Tests
// ============================================================================

#[tokio::test]
async fn test_204_resolves_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/farms/abc"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let result: Option<serde_json::Value> = client.delete("/farms/abc").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_malformed_json_body_resolves_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farms/abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html>not json</html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let result: Option<serde_json::Value> = client.get("/farms/abc").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_blob_download_never_parses_json() {
    let server = MockServer::start().await;
    let farm_id = Uuid::new_v4();
    let pdf = b"%PDF-1.7 not even close to json".to_vec();

    Mock::given(method("GET"))
        .and(path(format!("/farms/{}/summary/pdf", farm_id)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(pdf.clone())
                .insert_header("content-type", "application/pdf"),
        )
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let bytes = client.summary_pdf(farm_id).await.unwrap();
    assert_eq!(bytes, pdf);
}

#[tokio::test]
async fn test_put_sends_json_body_and_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/farms/abc"))
        .and(header("authorization", "Bearer access-token"))
        .and(body_json(json!({"name": "Renamed Field"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let result: Option<serde_json::Value> = client
        .put("/farms/abc", &json!({"name": "Renamed Field"}))
        .await
        .unwrap();

    assert_eq!(result.unwrap()["ok"], true);
}

#[tokio::test]
async fn test_caller_headers_are_merged() {
    use agris_client::ApiRequest;
    use reqwest::header::HeaderValue;

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farms"))
        .and(header("x-request-source", "cli"))
        .and(header("authorization", "Bearer access-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let request =
        ApiRequest::get("/farms").with_header("x-request-source", HeaderValue::from_static("cli"));
    let result: Option<Vec<serde_json::Value>> = client.execute(request).await.unwrap();

    assert_eq!(result.unwrap().len(), 0);
}

#[tokio::test]
async fn test_prediction_health_is_public() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/prediction/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let health = client.prediction_health().await.unwrap().unwrap();
    assert_eq!(health["status"], "ok");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_api_error_carries_status_and_detail() {
    let server = MockServer::start().await;
    let farm_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/farms/{}", farm_id)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Farm not found"
        })))
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let err = client.farm(farm_id).await.unwrap_err();

    match err {
        Error::Api(e) => {
            assert_eq!(e.status, 404);
            assert_eq!(e.detail.as_deref(), Some("Farm not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_preserved() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farms"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "access-token", "refresh-token");
    let err = client.farms().await.unwrap_err();

    match err {
        Error::Api(e) => {
            assert_eq!(e.status, 500);
            assert_eq!(e.detail.as_deref(), Some("Internal Server Error"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    // Nothing listens on port 1
    let base = BaseUrl::new("http://127.0.0.1:1").unwrap();
    let client = AgrisClient::new(base, Arc::new(MemoryTokenStore::new()));

    let err = client.farms().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
