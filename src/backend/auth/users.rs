/**
 * User Model and Repository
 *
 * This module defines the user record and the persistence operations the
 * authentication handlers need. Implementations live in `backend::store`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::backend::store::StoreError;

/// User struct representing a user in the store
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Gravatar URL derived from the email at registration
    pub avatar: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when registering a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
}

impl NewUser {
    /// Assign an id and creation time
    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            avatar: self.avatar,
            created_at: Utc::now(),
        }
    }
}

/// Persistence operations on users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Get user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Create a new user
    ///
    /// Fails with `StoreError::DuplicateEmail` when the email is already
    /// registered. The check and the insert are a single atomic step.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Delete a user. Returns true if a record was removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StoreError>;
}
