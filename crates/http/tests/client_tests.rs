//! Integration tests for the Nimbus HTTP client

#![cfg(feature = "client")]

use nimbus_http::client::{ClientError, PublicNimbusClient, TypedClientBuilder};
use nimbus_http::types::{
    ChallengeResponse, LoginRequest, Profile, ResendRequest, VerifyRequest, VerifyResponse,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn login_returns_challenge() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/web/login"))
        .and(body_partial_json(json!({"login": "alice"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "challenge_id": "c1",
            "email": "a***@x.com",
            "expires_in": 600
        })))
        .mount(&mock_server)
        .await;

    let client = PublicNimbusClient::new(mock_server.uri()).unwrap();
    let response = client
        .login(LoginRequest {
            login: "alice".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert!(response.ok());
    assert_eq!(response.status, 200);
    let challenge: ChallengeResponse = response.json().unwrap();
    assert_eq!(challenge.challenge_id, "c1");
    assert_eq!(challenge.email, "a***@x.com");
    assert_eq!(challenge.expires_in, 600);
}

#[tokio::test]
async fn wrong_otp_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/web/login/verify"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": [{"msg": "invalid code"}]
        })))
        .mount(&mock_server)
        .await;

    let client = PublicNimbusClient::new(mock_server.uri()).unwrap();
    let response = client
        .verify(VerifyRequest {
            challenge_id: "c1".to_string(),
            code: "0000".to_string(),
        })
        .await
        .unwrap();

    assert!(!response.ok());
    assert_eq!(response.status, 401);
    assert_eq!(
        nimbus_http::client::user_message(
            nimbus_http::client::EndpointKind::Verify,
            response.status,
            response.data.as_ref()
        ),
        "invalid code"
    );
    // a failed verify must not yield a token
    assert!(response.json::<VerifyResponse>().is_none());
}

#[tokio::test]
async fn resend_204_has_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/web/login/resend"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = PublicNimbusClient::new(mock_server.uri()).unwrap();
    let response = client
        .resend(ResendRequest {
            challenge_id: "c1".to_string(),
        })
        .await
        .unwrap();

    assert!(response.ok());
    assert_eq!(response.status, 204);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn bearer_header_is_attached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/web/me"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "email": "alice@x.com",
            "is_premium": true
        })))
        .mount(&mock_server)
        .await;

    let client = PublicNimbusClient::new(mock_server.uri())
        .unwrap()
        .authenticate("test-token");
    let response = client.me().await.unwrap();

    assert!(response.ok());
    let profile: Profile = response.json().unwrap();
    assert_eq!(profile.id, "u1");
    assert!(profile.is_premium);
}

#[tokio::test]
async fn session_invalid_statuses_pass_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/web/me"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = PublicNimbusClient::new(mock_server.uri())
        .unwrap()
        .authenticate("stale-token");
    let response = client.me().await.unwrap();

    assert!(!response.ok());
    assert_eq!(response.status, 404);
}

#[tokio::test]
async fn non_json_body_yields_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/web/me"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = PublicNimbusClient::new(mock_server.uri())
        .unwrap()
        .authenticate("t");
    let response = client.me().await.unwrap();

    assert_eq!(response.status, 502);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn malformed_json_body_yields_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/web/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{not json", "application/json"),
        )
        .mount(&mock_server)
        .await;

    let client = PublicNimbusClient::new(mock_server.uri())
        .unwrap()
        .authenticate("t");
    let response = client.me().await.unwrap();

    // malformed bodies are treated as absent, not as a hard failure
    assert_eq!(response.status, 200);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/web/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build_public()
        .unwrap();

    let result = client
        .login(LoginRequest {
            login: "alice".to_string(),
            password: "secret".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ClientError::Timeout)));
}
