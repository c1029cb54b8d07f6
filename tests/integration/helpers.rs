//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use taskhub_api::{AppState, build_app};
use taskhub_core::config::{AppConfig, DatabaseProvider};
use taskhub_database::provider::StoreHandles;

/// Signing key shared by every test app.
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

/// Response captured from the router
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (`Value::Null` when empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over fresh in-memory stores.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = TEST_SECRET.to_string();
        config.database.provider = DatabaseProvider::Memory;

        let state = AppState::new(config.clone(), StoreHandles::memory())
            .expect("Failed to build app state");

        Self {
            router: build_app(state),
            config,
        }
    }

    /// Send a request through the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let req = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let body = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Send a request carrying `Authorization: Bearer <token>`.
    pub async fn request_as(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: &str,
    ) -> TestResponse {
        let header = format!("Bearer {token}");
        self.request(method, path, body, Some(&header)).await
    }

    /// Register an account and return the response.
    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/register",
            Some(serde_json::json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    /// Log in and return the token, panicking on failure.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("token missing from login response")
            .to_string()
    }

    /// Register alice (admin) and bob (user); return their tokens.
    pub async fn seed_alice_and_bob(&self) -> (String, String) {
        assert_eq!(self.register("alice", "pw1").await.status, StatusCode::CREATED);
        assert_eq!(self.register("bob", "pw2").await.status, StatusCode::CREATED);
        (self.login("alice", "pw1").await, self.login("bob", "pw2").await)
    }
}

/// A valid task body.
pub fn task_body(title: &str) -> Value {
    serde_json::json!({
        "title": title,
        "description": "quarterly numbers",
        "due_date": "2030-01-15T12:00:00Z",
        "status": "pending",
    })
}
