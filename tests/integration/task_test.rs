//! Integration tests for task CRUD and the admin gate on writes.

mod helpers;

use axum::http::StatusCode;
use uuid::Uuid;

use helpers::task_body;

#[tokio::test]
async fn test_admin_task_lifecycle() {
    let app = helpers::TestApp::new();
    let (alice, _) = app.seed_alice_and_bob().await;

    let created = app
        .request_as("POST", "/tasks", Some(task_body("Report")), &alice)
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["title"], "Report");
    assert_eq!(created.body["status"], "pending");
    let id = created.body["id"].as_str().unwrap().to_string();

    let fetched = app.request_as("GET", &format!("/tasks/{id}"), None, &alice).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let mut changes = task_body("Final report");
    changes["status"] = serde_json::json!("in-progress");
    let updated = app
        .request_as("PUT", &format!("/tasks/{id}"), Some(changes), &alice)
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "Final report");
    assert_eq!(updated.body["status"], "in-progress");

    let deleted = app
        .request_as("DELETE", &format!("/tasks/{id}"), None, &alice)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app.request_as("GET", &format!("/tasks/{id}"), None, &alice).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_can_read_but_not_write() {
    let app = helpers::TestApp::new();
    let (alice, bob) = app.seed_alice_and_bob().await;

    let created = app
        .request_as("POST", "/tasks", Some(task_body("Report")), &alice)
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let listed = app.request_as("GET", "/tasks", None, &bob).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let fetched = app.request_as("GET", &format!("/tasks/{id}"), None, &bob).await;
    assert_eq!(fetched.status, StatusCode::OK);

    let create = app
        .request_as("POST", "/tasks", Some(task_body("Sneaky")), &bob)
        .await;
    assert_eq!(create.status, StatusCode::FORBIDDEN);

    let update = app
        .request_as("PUT", &format!("/tasks/{id}"), Some(task_body("Sneaky")), &bob)
        .await;
    assert_eq!(update.status, StatusCode::FORBIDDEN);

    let delete = app
        .request_as("DELETE", &format!("/tasks/{id}"), None, &bob)
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let still_there = app.request_as("GET", "/tasks", None, &alice).await;
    assert_eq!(still_there.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_forbidden_before_body_validation() {
    let app = helpers::TestApp::new();
    let (_, bob) = app.seed_alice_and_bob().await;

    let response = app
        .request_as("POST", "/tasks", Some(serde_json::json!({ "title": "" })), &bob)
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_writes_require_authentication() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/tasks", Some(task_body("Report")), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_task_bodies() {
    let app = helpers::TestApp::new();
    let (alice, _) = app.seed_alice_and_bob().await;

    let blank_title = app
        .request_as("POST", "/tasks", Some(task_body("")), &alice)
        .await;
    assert_eq!(blank_title.status, StatusCode::BAD_REQUEST);

    let mut bad_status = task_body("Report");
    bad_status["status"] = serde_json::json!("archived");
    let response = app
        .request_as("POST", "/tasks", Some(bad_status), &alice)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let missing_due = app
        .request_as(
            "POST",
            "/tasks",
            Some(serde_json::json!({ "title": "Report" })),
            &alice,
        )
        .await;
    assert_eq!(missing_due.status, StatusCode::BAD_REQUEST);

    let mut missing_status = task_body("Report");
    missing_status
        .as_object_mut()
        .unwrap()
        .remove("status");
    let response = app
        .request_as("POST", "/tasks", Some(missing_status), &alice)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_and_malformed_task_ids() {
    let app = helpers::TestApp::new();
    let (alice, _) = app.seed_alice_and_bob().await;

    let unknown = Uuid::new_v4();
    let response = app
        .request_as("GET", &format!("/tasks/{unknown}"), None, &alice)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request_as("GET", "/tasks/not-a-uuid", None, &alice).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request_as("PUT", &format!("/tasks/{unknown}"), Some(task_body("x")), &alice)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request_as("DELETE", &format!("/tasks/{unknown}"), None, &alice)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
