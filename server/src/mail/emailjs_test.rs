use httpmock::prelude::*;

use super::*;
use crate::mail::config::MailTimeouts;

fn test_config(base_url: String, private_key: Option<&str>) -> EmailJsConfig {
    EmailJsConfig {
        service_id: "service_test".into(),
        template_id: "template_test".into(),
        public_key: "public_test".into(),
        private_key: private_key.map(str::to_string),
        base_url,
        timeouts: MailTimeouts { request_secs: 5, connect_secs: 2 },
    }
}

fn sample_request() -> ContactRequest {
    ContactRequest {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        subject: "Project inquiry".into(),
        message: "I would like to talk about a project.".into(),
    }
}

#[test]
fn send_request_omits_access_token_without_private_key() {
    let config = test_config("http://localhost".into(), None);
    let request = sample_request();
    let json = serde_json::to_value(build_send_request(&config, &request)).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "service_id": "service_test",
            "template_id": "template_test",
            "user_id": "public_test",
            "template_params": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "Project inquiry",
                "message": "I would like to talk about a project."
            }
        })
    );
}

#[test]
fn send_request_includes_access_token_with_private_key() {
    let config = test_config("http://localhost".into(), Some("secret"));
    let request = sample_request();
    let json = serde_json::to_value(build_send_request(&config, &request)).unwrap();

    assert_eq!(json["accessToken"], "secret");
}

#[tokio::test]
async fn send_posts_template_params_and_accepts_200() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1.0/email/send")
            .json_body_partial(r#"{"service_id":"service_test","template_params":{"email":"ada@example.com"}}"#);
        then.status(200).body("OK");
    });

    let client = EmailJsClient::new(test_config(server.base_url(), None)).unwrap();
    client.send(&sample_request()).await.unwrap();

    mock.assert();
}

#[tokio::test]
async fn send_maps_rejection_to_api_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1.0/email/send");
        then.status(400).body("The user_id parameter is required");
    });

    let client = EmailJsClient::new(test_config(server.base_url(), None)).unwrap();
    let err = client.send(&sample_request()).await.unwrap_err();

    assert!(matches!(
        err,
        MailError::ApiResponse { status: 400, ref body } if body.contains("user_id")
    ));
}

#[tokio::test]
async fn send_maps_unreachable_host_to_api_request() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let client = EmailJsClient::new(test_config("http://127.0.0.1:9".into(), None)).unwrap();
    let err = client.send(&sample_request()).await.unwrap_err();

    assert!(matches!(err, MailError::ApiRequest(_)));
}
