/**
 * Authentication Handler Types
 *
 * Request and response types used by the registration, login and
 * current-user handlers. Request types carry their `validator` rules; the
 * messages are part of the public API.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::backend::auth::users::User;

/// Registration request
///
/// Missing fields deserialize as empty strings so that they are reported
/// as field errors rather than as a malformed body.
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name required"))]
    pub name: String,
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    /// Plaintext password, hashed before storage and never logged
    #[validate(length(min = 6, message = "Please enter a password with 6 or more characters"))]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(email(message = "Please include a valid email"))]
    pub email: String,
    #[validate(required(message = "Password required"))]
    pub password: Option<String>,
}

/// User response (without the password digest)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: user.created_at,
        }
    }
}
