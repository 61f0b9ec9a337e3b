//! Store Module
//!
//! Implementations of the user and profile repositories.
//!
//! - **`postgres`** - `PgStore`, backed by a `sqlx` PostgreSQL pool. Unique
//!   constraints and `ON CONFLICT` make registration and profile upserts
//!   atomic; account deletion runs in a transaction.
//! - **`memory`** - `MemoryStore`, a process-local store used when no
//!   `DATABASE_URL` is configured and by the test suite. Every write happens
//!   under one lock, so it offers the same atomicity.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::users::{User, UserRepository};
use crate::backend::profile::profiles::ProfileRepository;

/// PostgreSQL store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("user {0} does not exist")]
    UnknownUser(Uuid),
}

/// Everything the HTTP layer needs from storage
#[async_trait]
pub trait Store: UserRepository + ProfileRepository {
    /// Delete a user's profile and the user together
    ///
    /// Either both records are removed or neither is. Returns the deleted
    /// user, or `None` if no such user existed.
    async fn delete_account(&self, user_id: Uuid) -> Result<Option<User>, StoreError>;
}

/// Store handle shared by all requests
pub type SharedStore = Arc<dyn Store>;
