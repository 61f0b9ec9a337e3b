//! Authentication API integration tests
//!
//! Tests for login (`POST /api/auth`), the current user
//! (`GET /api/auth`) and token checks on protected routes.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

use crate::assert_status;
use crate::common::{bearer, error_messages, register_unique_user, register_user, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    let user = register_user(&app, "A", "a@x.com", "secret1").await;

    let response = app
        .post("/api/auth", None, json!({ "email": "a@x.com", "password": "secret1" }))
        .await;
    assert_status!(response, StatusCode::OK);

    let token = response.json()["token"].as_str().unwrap().to_string();
    assert_eq!(app.sessions.verify_token(&token).unwrap(), user.id);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "secret1").await;

    let response = app
        .post("/api/auth", None, json!({ "email": "a@x.com", "password": "wrong-password" }))
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "errors": [{ "msg": "Invalid" }] }));
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = TestApp::new();

    let response = app
        .post("/api/auth", None, json!({ "email": "nobody@x.com", "password": "secret1" }))
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({ "errors": [{ "msg": "Invalid" }] }));
}

#[tokio::test]
async fn test_login_field_errors() {
    let app = TestApp::new();

    let response = app.post("/api/auth", None, json!({ "email": "a@x.com" })).await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(error_messages(&response.json()), vec!["Password required"]);

    let response = app
        .post("/api/auth", None, json!({ "email": "bad", "password": "secret1" }))
        .await;
    assert_status!(response, StatusCode::BAD_REQUEST);
    assert_eq!(error_messages(&response.json()), vec!["Please include a valid email"]);
}

#[tokio::test]
async fn test_current_user_without_password() {
    let app = TestApp::new();
    let user = register_user(&app, "A", "a@x.com", "secret1").await;

    let response = app.get("/api/auth", Some(&user.token)).await;
    assert_status!(response, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["id"], user.id.to_string());
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], user.email);
    assert!(body["avatar"].as_str().unwrap().starts_with("//www.gravatar.com/avatar/"));
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_current_user_with_bearer_header() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "A").await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/auth")
        .header(AUTHORIZATION, bearer(&user.token))
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.json()["id"], user.id.to_string());
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::new();

    let response = app.get("/api/auth", None).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!({ "msg": "No token, authorization denied" }));
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let app = TestApp::new();

    let response = app.get("/api/auth", Some("not-a-token")).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!({ "msg": "Token is not valid" }));
}

#[tokio::test]
async fn test_protected_route_with_tampered_token() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "A").await;
    let other = app.sessions.issue_token(Uuid::new_v4()).unwrap();

    // Header and payload of one token with the signature of another
    let (signed_part, _) = user.token.rsplit_once('.').unwrap();
    let (_, other_signature) = other.rsplit_once('.').unwrap();
    let tampered = format!("{}.{}", signed_part, other_signature);

    let response = app.get("/api/auth", Some(&tampered)).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!({ "msg": "Token is not valid" }));
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::new();
    let user = register_unique_user(&app, "A").await;

    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
    let issued_at = now - 2 * app.sessions.ttl_secs();
    let expired = app.sessions.issue_token_at(user.id, issued_at).unwrap();

    let response = app.get("/api/auth", Some(&expired)).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!({ "msg": "Token is not valid" }));
}

#[tokio::test]
async fn test_token_for_unknown_user() {
    let app = TestApp::new();
    let token = app.sessions.issue_token(Uuid::new_v4()).unwrap();

    let response = app.get("/api/auth", Some(&token)).await;
    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_root_and_fallback() {
    let app = TestApp::new();

    let response = app.get("/", None).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.text(), "Hello World!");

    let response = app.get("/api/nothing-here", None).await;
    assert_status!(response, StatusCode::NOT_FOUND);
}
