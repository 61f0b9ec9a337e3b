/**
 * Current User Handler
 *
 * GET /api/auth (protected)
 *
 * Returns the user named by the session token, without the password digest.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401` - The token names a user that no longer exists
/// * `500` - `Server error at Auth` on store failures
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .store
        .find_by_id(auth.user_id)
        .await
        .map_err(|e| ApiError::internal("Server error at Auth", e))?
        .ok_or_else(|| {
            tracing::warn!("Token for deleted user: {}", auth.user_id);
            ApiError::invalid_token()
        })?;

    Ok(Json(UserResponse::from(user)))
}
