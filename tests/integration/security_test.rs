//! Integration tests for the security CRUD pages.

mod helpers;

use axum::http::StatusCode;

use crudhub_core::traits::Repository;
use crudhub_entity::Security;

use helpers::{TestApp, id};

#[tokio::test]
async fn test_empty_list_renders_empty_message() {
    let app = TestApp::new().await;

    let response = app.get("/security/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("No records found."));
}

#[tokio::test]
async fn test_list_without_trailing_slash() {
    let app = TestApp::new().await;
    let response = app.get("/security", None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_create_redirects_and_flashes_once() {
    let app = TestApp::new().await;

    let response = app.post_form("/security/new", "title=X").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/security/"));
    let cookie = response.flash_cookie().expect("flash cookie set");

    let list = app.get("/security/", Some(&cookie)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(list.body.contains("<td>X</td>"));
    assert!(list.body.contains("<td>1</td>"));
    assert!(list.body.contains("Record created successfully."));
    assert!(
        list.set_cookies()
            .iter()
            .any(|c| c.starts_with("crudhub_flash=") && c.contains("Max-Age=0")),
        "rendering the list clears the flash cookie"
    );

    let all = app.state.securities.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "X");
    assert!(all[0].id.is_some_and(|id| id.get() >= 1));
}

#[tokio::test]
async fn test_invalid_create_rerenders_form_with_422() {
    let app = TestApp::new().await;

    let response = app.post_form("/security/new", "title=++&description=").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Title must be between 1 and 255 characters."));
    assert!(response.flash_cookie().is_none());
    assert!(app.state.securities.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_undecodable_create_rerenders_form_with_422() {
    let app = TestApp::new().await;

    let response = app.post_form("/security/new", "title=a&title=b").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("The submitted form could not be read."));
    assert!(response.body.contains("name=\"title\""));
    assert!(response.flash_cookie().is_none());
    assert!(app.state.securities.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_undecodable_update_keeps_stored_values() {
    let app = TestApp::new().await;
    app.state
        .securities
        .save(Security::new("Stable", None))
        .await
        .unwrap();

    let response = app
        .post_form("/security/1/edit", "_method=PUT&title=a&title=b")
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("The submitted form could not be read."));
    assert!(response.body.contains("value=\"Stable\""));
    assert_eq!(app.state.securities.get(id(1)).await.unwrap().title, "Stable");
}

#[tokio::test]
async fn test_new_form_renders() {
    let app = TestApp::new().await;
    let response = app.get("/security/new", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("name=\"title\""));
    assert!(!response.body.contains("name=\"_method\""));
}

#[tokio::test]
async fn test_view_shows_record() {
    let app = TestApp::new().await;
    app.state
        .securities
        .save(Security::new("Bond", Some("Ten year".into())))
        .await
        .unwrap();

    let response = app.get("/security/1", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Bond"));
    assert!(response.body.contains("Ten year"));
}

#[tokio::test]
async fn test_edit_form_is_prefilled_with_put_override() {
    let app = TestApp::new().await;
    app.state
        .securities
        .save(Security::new("Equity", None))
        .await
        .unwrap();

    let response = app.get("/security/1/edit", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("value=\"Equity\""));
    assert!(response.body.contains("name=\"_method\" value=\"PUT\""));
}

#[tokio::test]
async fn test_update_via_method_override_preserves_created_at() {
    let app = TestApp::new().await;
    let original = app
        .state
        .securities
        .save(Security::new("Before", None))
        .await
        .unwrap();

    let response = app
        .post_form("/security/1/edit", "_method=PUT&title=After&description=notes")
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/security/"));

    let cookie = response.flash_cookie().expect("flash cookie set");
    let list = app.get("/security/", Some(&cookie)).await;
    assert!(list.body.contains("Record updated successfully."));

    let updated = app.state.securities.get(id(1)).await.unwrap();
    assert_eq!(updated.title, "After");
    assert_eq!(updated.description.as_deref(), Some("notes"));
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
}

#[tokio::test]
async fn test_invalid_update_keeps_stored_record() {
    let app = TestApp::new().await;
    app.state
        .securities
        .save(Security::new("Keep", None))
        .await
        .unwrap();

    let response = app.post_form("/security/1/edit", "_method=PUT&title=").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Title must be between 1 and 255 characters."));
    assert_eq!(app.state.securities.get(id(1)).await.unwrap().title, "Keep");
}

#[tokio::test]
async fn test_edit_missing_id_is_not_found() {
    let app = TestApp::new().await;
    app.state
        .securities
        .save(Security::new("Only", None))
        .await
        .unwrap();

    let form = app.get("/security/999/edit", None).await;
    assert_eq!(form.status, StatusCode::NOT_FOUND);

    let submit = app
        .post_form("/security/999/edit", "_method=PUT&title=Changed")
        .await;
    assert_eq!(submit.status, StatusCode::NOT_FOUND);

    let all = app.state.securities.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Only");
}

#[tokio::test]
async fn test_delete_confirmation_and_double_delete() {
    let app = TestApp::new().await;
    app.state
        .securities
        .save(Security::new("Doomed", None))
        .await
        .unwrap();

    let confirm = app.get("/security/1/delete", None).await;
    assert_eq!(confirm.status, StatusCode::OK);
    assert!(confirm.body.contains("name=\"_method\" value=\"DELETE\""));

    let first = app.post_form("/security/1/delete", "_method=DELETE").await;
    assert_eq!(first.status, StatusCode::SEE_OTHER);
    assert_eq!(first.location(), Some("/security/"));

    let cookie = first.flash_cookie().expect("flash cookie set");
    let list = app.get("/security/", Some(&cookie)).await;
    assert!(list.body.contains("Record deleted successfully."));
    assert!(list.body.contains("No records found."));

    let second = app.post_form("/security/1/delete", "_method=DELETE").await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);

    let view = app.get("/security/1", None).await;
    assert_eq!(view.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_ids_are_not_found() {
    let app = TestApp::new().await;
    app.state
        .securities
        .save(Security::new("Seven", None))
        .await
        .unwrap();

    for path in [
        "/security/0",
        "/security/007",
        "/security/abc",
        "/security/-1",
        "/security/99999999999999999999",
        "/security/01/edit",
        "/security/x/delete",
    ] {
        let response = app.get(path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_pagination_windows() {
    let app = TestApp::new().await;
    for n in 1..=12 {
        app.state
            .securities
            .save(Security::new(format!("Security {n}"), None))
            .await
            .unwrap();
    }

    let first = app.get("/security/", None).await;
    assert!(first.body.contains("Page 1 of 2 (12 total)"));
    assert!(first.body.contains("<td>Security 10</td>"));
    assert!(!first.body.contains("<td>Security 11</td>"));

    let second = app.get("/security/?page=2", None).await;
    assert_eq!(second.status, StatusCode::OK);
    assert!(second.body.contains("Page 2 of 2 (12 total)"));
    assert!(second.body.contains("<td>Security 11</td>"));
    assert!(second.body.contains("<td>Security 12</td>"));
    assert!(!second.body.contains("<td>Security 1</td>"));

    let past_end = app.get("/security/?page=5", None).await;
    assert_eq!(past_end.status, StatusCode::OK);
    assert!(!past_end.body.contains("<td>Security"));
    assert!(past_end.body.contains("Page 5 of 2 (12 total)"));

    let clamped = app.get("/security/?page=0", None).await;
    assert!(clamped.body.contains("Page 1 of 2 (12 total)"));

    let junk = app.get("/security/?page=abc", None).await;
    assert!(junk.body.contains("Page 1 of 2 (12 total)"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;
    let response = app.get("/nowhere", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
