use std::sync::Arc;

use axum::body::to_bytes;
use axum::http::HeaderValue;

use super::*;
use crate::state::test_helpers::{self, MockMailer};

fn peer() -> SocketAddr {
    "192.0.2.10:54321".parse().unwrap()
}

async fn call(state: AppState, request: ContactRequest) -> (StatusCode, serde_json::Value) {
    let resp = submit_contact(State(state), ConnectInfo(peer()), HeaderMap::new(), Ok(Json(request))).await;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn delivered_message_returns_ok_body() {
    let mailer = Arc::new(MockMailer::default());
    let state = test_helpers::test_app_state_with_mailer(mailer.clone());

    let (status, body) = call(state, test_helpers::valid_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "ok": true }));
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn invalid_message_returns_422_with_field_errors() {
    let state = test_helpers::test_app_state_with_mailer(Arc::new(MockMailer::default()));
    let mut request = test_helpers::valid_request();
    request.subject = "Hi".into();

    let (status, body) = call(state, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation failed");
    assert_eq!(body["fields"][0]["field"], "subject");
    assert_eq!(body["fields"][0]["message"], "Subject must be at least 5 characters.");
}

#[tokio::test]
async fn missing_mailer_returns_503() {
    let (status, body) = call(test_helpers::test_app_state(), test_helpers::valid_request()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, serde_json::json!({ "error": "contact delivery not configured" }));
}

#[tokio::test]
async fn upstream_failure_returns_502() {
    let state = test_helpers::test_app_state_with_mailer(Arc::new(MockMailer::failing(503)));

    let (status, body) = call(state, test_helpers::valid_request()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "email delivery failed");
}

#[tokio::test]
async fn third_message_from_same_client_returns_429() {
    let state = test_helpers::test_app_state_with_mailer(Arc::new(MockMailer::default()));

    for _ in 0..2 {
        let (status, _) = call(state.clone(), test_helpers::valid_request()).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = call(state, test_helpers::valid_request()).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["error"].as_str().unwrap().contains("rate limit"));
}

// =============================================================================
// client_ip
// =============================================================================

fn forwarded(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn client_ip_uses_peer_when_proxy_untrusted() {
    let headers = forwarded("198.51.100.1");
    assert_eq!(client_ip(&headers, peer(), false), peer().ip());
}

#[test]
fn client_ip_uses_first_forwarded_hop_when_trusted() {
    let headers = forwarded("198.51.100.1, 10.0.0.1");
    assert_eq!(client_ip(&headers, peer(), true), "198.51.100.1".parse::<IpAddr>().unwrap());
}

#[test]
fn client_ip_falls_back_on_garbage_header() {
    let headers = forwarded("unknown");
    assert_eq!(client_ip(&headers, peer(), true), peer().ip());
    assert_eq!(client_ip(&HeaderMap::new(), peer(), true), peer().ip());
}
