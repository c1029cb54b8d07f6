//! Integration tests for registration, login, and the bearer gate.

mod helpers;

use axum::http::StatusCode;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use taskhub_auth::jwt::Claims;
use taskhub_entity::user::UserRole;

#[tokio::test]
async fn test_first_user_is_admin() {
    let app = helpers::TestApp::new();

    let alice = app.register("alice", "pw1").await;
    assert_eq!(alice.status, StatusCode::CREATED);
    assert_eq!(alice.body["username"], "alice");
    assert_eq!(alice.body["role"], "admin");
    assert!(alice.body.get("password_hash").is_none());

    let bob = app.register("bob", "pw2").await;
    assert_eq!(bob.status, StatusCode::CREATED);
    assert_eq!(bob.body["role"], "user");
}

#[tokio::test]
async fn test_register_validation() {
    let app = helpers::TestApp::new();

    assert_eq!(app.register("", "pw").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.register("carol", "").await.status, StatusCode::BAD_REQUEST);

    let malformed = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": "carol" })),
            None,
        )
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = helpers::TestApp::new();
    app.register("alice", "pw1").await;

    let response = app.register("alice", "another").await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "DUPLICATE_USER");
}

#[tokio::test]
async fn test_login_returns_token() {
    let app = helpers::TestApp::new();
    app.register("alice", "pw1").await;

    let token = app.login("alice", "pw1").await;
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new();
    app.register("alice", "pw1").await;

    let wrong_password = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "alice", "password": "nope" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "username": "mallory", "password": "pw1" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/tasks", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_non_bearer_authorization_header() {
    let app = helpers::TestApp::new();
    app.register("alice", "pw1").await;
    let token = app.login("alice", "pw1").await;

    for header in [
        token.clone(),
        format!("Basic {token}"),
        format!("bearer {token}"),
        "Bearer ".to_string(),
    ] {
        let response = app.request("GET", "/tasks", None, Some(&header)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "header {header:?}");
    }
}

#[tokio::test]
async fn test_expired_and_forged_tokens_rejected() {
    let app = helpers::TestApp::new();

    let expired = Claims {
        id: Uuid::new_v4(),
        username: "alice".to_string(),
        role: UserRole::Admin,
        exp: Utc::now().timestamp() - 60,
    };
    let expired_token = encode(
        &Header::new(Algorithm::HS256),
        &expired,
        &EncodingKey::from_secret(helpers::TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let forged = Claims {
        exp: Utc::now().timestamp() + 3600,
        ..expired.clone()
    };
    let forged_token = encode(
        &Header::new(Algorithm::HS256),
        &forged,
        &EncodingKey::from_secret(b"not-the-server-secret"),
    )
    .unwrap();

    let expired_response = app.request_as("GET", "/tasks", None, &expired_token).await;
    let forged_response = app.request_as("GET", "/tasks", None, &forged_token).await;

    assert_eq!(expired_response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(forged_response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(expired_response.body, forged_response.body);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
