use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wishlist_sheets::{FailureKind, ServiceAccountAuth, ServiceAccountKey, TokenProvider};

const FIXTURE: &str = include_str!("fixtures/service_account.json");

fn key_for(server: &MockServer) -> ServiceAccountKey {
    let mut key: ServiceAccountKey = serde_json::from_str(FIXTURE).expect("fixture parses");
    key.token_uri = format!("{}/token", server.uri());
    key
}

fn auth_with_clock(server: &MockServer, clock: Arc<AtomicI64>) -> ServiceAccountAuth {
    let mut auth = ServiceAccountAuth::new(key_for(server), Duration::from_secs(5)).expect("auth");
    auth.now = Arc::new(move || clock.load(Ordering::SeqCst));
    auth
}

async fn mount_token_endpoint(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains(
            "grant_type=urn%3Aietf%3Aparams%3Aoauth%3Agrant-type%3Ajwt-bearer",
        ))
        .and(body_string_contains("assertion="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ya29.test-token",
            "expires_in": 3600,
            "token_type": "Bearer"
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[test]
fn fixture_key_is_accepted() {
    let key: ServiceAccountKey = serde_json::from_str(FIXTURE).expect("fixture parses");
    assert_eq!(key.key_type, "service_account");
    let auth = ServiceAccountAuth::new(key, Duration::from_secs(5)).expect("auth");
    assert_eq!(
        auth.client_email(),
        "wishlist@wishlist-test.iam.gserviceaccount.com"
    );
}

#[tokio::test]
async fn token_is_exchanged_once_and_cached() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 1).await;

    let clock = Arc::new(AtomicI64::new(1_700_000_000));
    let auth = auth_with_clock(&server, clock.clone());

    assert_eq!(auth.access_token().await.expect("token"), "ya29.test-token");
    clock.fetch_add(600, Ordering::SeqCst);
    assert_eq!(auth.access_token().await.expect("token"), "ya29.test-token");
}

#[tokio::test]
async fn token_is_refreshed_near_expiry() {
    let server = MockServer::start().await;
    mount_token_endpoint(&server, 2).await;

    let clock = Arc::new(AtomicI64::new(1_700_000_000));
    let auth = auth_with_clock(&server, clock.clone());

    auth.access_token().await.expect("token");
    clock.fetch_add(3600 - 30, Ordering::SeqCst);
    auth.access_token().await.expect("token");
}

#[tokio::test]
async fn rejected_grant_is_an_auth_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant"
        })))
        .mount(&server)
        .await;

    let auth = auth_with_clock(&server, Arc::new(AtomicI64::new(1_700_000_000)));
    let err = auth.access_token().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Auth);
    assert!(err.message.contains("invalid_grant"));
}
