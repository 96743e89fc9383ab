//! Integration tests for the read-only task pages and health check.

mod helpers;

use axum::http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_task_list_shows_seeded_fixtures() {
    let app = TestApp::new().await;

    let response = app.get("/task/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(
        response
            .body
            .contains("Lorem ipsum dolor sit amet, consectetur adipiscing elit")
    );
    assert!(response.body.contains("Phasellus"));
    assert!(response.body.contains("porttitor"));
}

#[tokio::test]
async fn test_task_list_without_fixtures_is_empty() {
    let app = TestApp::with_seed(false).await;

    let response = app.get("/task", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("No records found."));
}

#[tokio::test]
async fn test_task_view() {
    let app = TestApp::new().await;

    let response = app.get("/task/2", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Etiam diam ipsum"));
    assert!(response.body.contains("vestibulum"));

    let missing = app.get("/task/4", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let malformed = app.get("/task/02", None).await;
    assert_eq!(malformed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_memory_store() {
    let app = TestApp::new().await;

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["store_reachable"], true);
}
