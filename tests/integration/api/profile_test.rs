//! Profile API integration tests
//!
//! Tests for the `/api/profile` routes.

use axum::http::StatusCode;
use devconnector::backend::auth::users::UserRepository;
use devconnector::backend::profile::profiles::ProfileRepository;
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::assert_status;
use crate::common::{error_messages, error_params, register_unique_user, TestApp};

#[tokio::test]
async fn test_create_profile() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Ada").await;

    let response = app
        .post(
            "/api/profile",
            Some(&user.token),
            json!({
                "status": "Developer",
                "skills": "node, express , mongo",
                "company": "Acme",
                "twitter": "https://twitter.com/ada",
                "website": ""
            }),
        )
        .await;
    assert_status!(response, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["user"], user.id.to_string());
    assert_eq!(body["status"], "Developer");
    assert_eq!(body["company"], "Acme");
    assert_eq!(body["skills"], json!(["node", "express", "mongo"]));
    assert_eq!(body["social"], json!({ "twitter": "https://twitter.com/ada" }));
    assert!(body.get("website").is_none());
}

#[tokio::test]
async fn test_update_profile_keeps_absent_fields() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Ada").await;

    let created = app
        .post(
            "/api/profile",
            Some(&user.token),
            json!({
                "status": "Developer",
                "skills": "rust",
                "company": "Acme",
                "bio": "Hello",
                "youtube": "https://youtube.com/ada"
            }),
        )
        .await;
    assert_status!(created, StatusCode::OK);
    let profile_id = created.json()["id"].clone();

    let updated = app
        .post(
            "/api/profile",
            Some(&user.token),
            json!({
                "status": "Senior Developer",
                "skills": "rust, tokio",
                "twitter": "https://twitter.com/ada"
            }),
        )
        .await;
    assert_status!(updated, StatusCode::OK);

    let body = updated.json();
    assert_eq!(body["id"], profile_id);
    assert_eq!(body["status"], "Senior Developer");
    assert_eq!(body["skills"], json!(["rust", "tokio"]));
    assert_eq!(body["company"], "Acme");
    assert_eq!(body["bio"], "Hello");
    assert_eq!(
        body["social"],
        json!({
            "youtube": "https://youtube.com/ada",
            "twitter": "https://twitter.com/ada"
        })
    );

    // Still exactly one profile for the user
    let all = app.store.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_profile_field_errors() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Ada").await;

    let response = app
        .post("/api/profile", Some(&user.token), json!({ "company": "Acme" }))
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);

    let body = response.json();
    assert_eq!(error_params(&body), vec!["skills", "status"]);
    assert_eq!(error_messages(&body), vec!["Skills are required", "Status is required"]);
    assert!(app.store.find_by_user(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_profile_write_requires_token() {
    let app = TestApp::new();

    let response = app
        .post("/api/profile", None, json!({ "status": "Developer", "skills": "rust" }))
        .await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!({ "msg": "No token, authorization denied" }));

    let response = app.delete("/api/profile", None).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);

    let response = app.get("/api/profile/me", None).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_my_profile() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Ada").await;

    let response = app.get("/api/profile/me", Some(&user.token)).await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "msg": "There is no profile for this user" }));

    app.post(
        "/api/profile",
        Some(&user.token),
        json!({ "status": "Developer", "skills": "rust" }),
    )
    .await;

    let response = app.get("/api/profile/me", Some(&user.token)).await;
    assert_status!(response, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["user"]["id"], user.id.to_string());
    assert_eq!(body["user"]["name"], "Ada");
    assert!(body["user"]["avatar"].as_str().is_some());
    assert!(body["user"].get("email").is_none());
}

#[tokio::test]
async fn test_list_profiles_is_public() {
    let app = TestApp::new();

    let response = app.get("/api/profile", None).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json(), json!([]));

    for name in ["Ada", "Grace"] {
        let user = register_unique_user(&app, name).await;
        app.post(
            "/api/profile",
            Some(&user.token),
            json!({ "status": "Developer", "skills": "rust" }),
        )
        .await;
    }

    let response = app.get("/api/profile", None).await;
    assert_status!(response, StatusCode::OK);

    let body = response.json();
    let mut names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["user"]["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Ada", "Grace"]);
}

#[tokio::test]
async fn test_profile_by_user() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Ada").await;
    app.post(
        "/api/profile",
        Some(&user.token),
        json!({ "status": "Developer", "skills": "rust" }),
    )
    .await;

    let response = app.get(&format!("/api/profile/user/{}", user.id), None).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json()["user"]["name"], "Ada");

    let response = app.get(&format!("/api/profile/user/{}", Uuid::new_v4()), None).await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "msg": "Profile not found" }));

    let response = app.get("/api/profile/user/not-a-uuid", None).await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "msg": "Profile not found" }));
}

#[tokio::test]
async fn test_delete_account() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Ada").await;
    app.post(
        "/api/profile",
        Some(&user.token),
        json!({ "status": "Developer", "skills": "rust" }),
    )
    .await;

    let response = app.delete("/api/profile", Some(&user.token)).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json(), json!({ "msg": "User Ada deleted" }));

    assert!(app.store.find_by_id(user.id).await.unwrap().is_none());
    assert!(app.store.find_by_user(user.id).await.unwrap().is_none());

    let response = app.get(&format!("/api/profile/user/{}", user.id), None).await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "msg": "Profile not found" }));

    // The token is still well-formed but names no user
    let response = app.get("/api/auth", Some(&user.token)).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);

    let response = app.delete("/api/profile", Some(&user.token)).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);

    let response = app
        .post(
            "/api/auth",
            None,
            json!({ "email": user.email, "password": user.password }),
        )
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "errors": [{ "msg": "Invalid" }] }));
}

#[tokio::test]
async fn test_delete_account_without_profile() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "Grace").await;

    let response = app.delete("/api/profile", Some(&user.token)).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json(), json!({ "msg": "User Grace deleted" }));
}
