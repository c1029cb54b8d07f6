//! Integration tests for user → admin promotion.

mod helpers;

use axum::http::StatusCode;

use helpers::task_body;

#[tokio::test]
async fn test_alice_promotes_bob() {
    let app = helpers::TestApp::new();
    let (alice, bob) = app.seed_alice_and_bob().await;

    let denied = app
        .request_as("POST", "/tasks", Some(task_body("Report")), &bob)
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let promoted = app.request_as("POST", "/promote/bob", None, &alice).await;
    assert_eq!(promoted.status, StatusCode::OK);
    assert_eq!(promoted.body["user"]["role"], "admin");

    // Bob's old token still carries the role it was issued with.
    let stale = app
        .request_as("POST", "/tasks", Some(task_body("Report")), &bob)
        .await;
    assert_eq!(stale.status, StatusCode::FORBIDDEN);

    let fresh = app.login("bob", "pw2").await;
    let allowed = app
        .request_as("POST", "/tasks", Some(task_body("Report")), &fresh)
        .await;
    assert_eq!(allowed.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_promote_twice_conflicts() {
    let app = helpers::TestApp::new();
    let (alice, _) = app.seed_alice_and_bob().await;

    let first = app.request_as("POST", "/promote/bob", None, &alice).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request_as("POST", "/promote/bob", None, &alice).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "ALREADY_ADMIN");

    let bootstrap = app.request_as("POST", "/promote/alice", None, &alice).await;
    assert_eq!(bootstrap.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_promote_unknown_user() {
    let app = helpers::TestApp::new();
    let (alice, _) = app.seed_alice_and_bob().await;

    let response = app.request_as("POST", "/promote/ghost", None, &alice).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_promote_requires_admin() {
    let app = helpers::TestApp::new();
    let (_, bob) = app.seed_alice_and_bob().await;

    let as_user = app.request_as("POST", "/promote/bob", None, &bob).await;
    assert_eq!(as_user.status, StatusCode::FORBIDDEN);

    let anonymous = app.request("POST", "/promote/bob", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}
