/**
 * Server Initialization
 *
 * Builds the application from a validated `ServerConfig`:
 *
 * 1. Open the store (PostgreSQL when `database_url` is set, otherwise the
 *    in-memory store)
 * 2. Create the password hasher and session keys
 * 3. Assemble the router
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::routes::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::{MemoryStore, PgStore, SharedStore, StoreError};

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Open the configured store
pub async fn open_store(config: &ServerConfig) -> Result<SharedStore, StoreError> {
    match &config.database_url {
        Some(url) => Ok(Arc::new(PgStore::connect(url).await?)),
        None => {
            tracing::warn!("DATABASE_URL not set. Using the in-memory store; data is lost on exit.");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, InitError> {
    tracing::info!("Initializing devconnector backend");

    let store = open_store(config).await?;
    let sessions = SessionKeys::new(config.jwt_secret()?, config.token_ttl_secs);
    let state = AppState::new(store, PasswordHasher::new(config.bcrypt_cost), sessions);

    Ok(create_router(state))
}
