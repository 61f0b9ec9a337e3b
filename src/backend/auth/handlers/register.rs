/**
 * Registration Handler
 *
 * POST /api/users
 *
 * 1. Validate name, email and password
 * 2. Reject an email that is already registered
 * 3. Hash the password and derive the Gravatar avatar
 * 4. Store the user and return a session token
 *
 * The store enforces email uniqueness as well, so two concurrent
 * registrations for one email still produce a single user.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::avatar::gravatar_url;
use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::users::NewUser;
use crate::backend::error::ApiError;
use crate::backend::middleware::validation::ValidatedJson;
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::TokenBody;

const SERVER_ERROR: &str = "Server Error";

/// Registration handler
///
/// # Errors
///
/// * `400` - Field errors, or `{"errors":[{"msg":"User already exists"}]}`
/// * `500` - `Server Error` on store, hashing or signing failures
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<Json<TokenBody>, ApiError> {
    tracing::info!("Registration request for: {}", request.email);

    let existing = state
        .store
        .find_by_email(&request.email)
        .await
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;
    if existing.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::user_already_exists());
    }

    let password_hash = state
        .passwords
        .hash(&request.password)
        .await
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;

    let new_user = NewUser {
        avatar: gravatar_url(&request.email),
        name: request.name,
        email: request.email,
        password_hash,
    };

    let user = state.store.create(new_user).await.map_err(|e| match e {
        StoreError::DuplicateEmail(email) => {
            tracing::warn!("Email registered concurrently: {}", email);
            ApiError::user_already_exists()
        }
        other => ApiError::internal(SERVER_ERROR, other),
    })?;

    let token = state
        .sessions
        .issue_token(user.id)
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok(Json(TokenBody { token }))
}
