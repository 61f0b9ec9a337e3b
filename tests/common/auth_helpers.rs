//! Authentication test helpers
//!
//! Provides utilities for registering test users and reading tokens.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use super::app::TestApp;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a user through the API
pub async fn register_user(app: &TestApp, name: &str, email: &str, password: &str) -> TestUser {
    let response = app
        .post(
            "/api/users",
            None,
            json!({ "name": name, "email": email, "password": password }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "Registration failed: {}", response.text());

    let token = response.json()["token"]
        .as_str()
        .expect("Registration returned no token")
        .to_string();
    let id = app
        .sessions
        .verify_token(&token)
        .expect("Registration returned an invalid token");

    TestUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Register a user with a unique email
pub async fn register_unique_user(app: &TestApp, name: &str) -> TestUser {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    register_user(app, name, &email, "secret1").await
}

/// Create authorization header value
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
