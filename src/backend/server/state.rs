/**
 * Application State
 *
 * `AppState` holds the process-wide collaborators, created once at startup:
 * the store, the password hasher and the session keys. It is cloned into
 * every handler; the `FromRef` implementations let handlers and middleware
 * extract only the part they need.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::passwords::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::store::SharedStore;

#[derive(Clone)]
pub struct AppState {
    /// User and profile storage
    pub store: SharedStore,
    /// bcrypt hasher
    pub passwords: PasswordHasher,
    /// Token signing and verification
    pub sessions: Arc<SessionKeys>,
}

impl AppState {
    pub fn new(store: SharedStore, passwords: PasswordHasher, sessions: SessionKeys) -> Self {
        Self {
            store,
            passwords,
            sessions: Arc::new(sessions),
        }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<SessionKeys> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
