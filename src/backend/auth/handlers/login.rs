/**
 * Login Handler
 *
 * POST /api/auth
 *
 * An unknown email and a wrong password produce the same response,
 * `{"errors":[{"msg":"Invalid"}]}`, so callers cannot probe for accounts.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::error::ApiError;
use crate::backend::middleware::validation::ValidatedJson;
use crate::backend::server::state::AppState;
use crate::shared::TokenBody;

const SERVER_ERROR: &str = "Server Error";

/// Login handler
///
/// # Errors
///
/// * `400` - Field errors, or `Invalid` for bad credentials
/// * `500` - `Server Error` on store, bcrypt or signing failures
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenBody>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = state
        .store
        .find_by_email(&request.email)
        .await
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.email);
            ApiError::invalid_credentials()
        })?;

    let password = request.password.unwrap_or_default();
    let valid = state
        .passwords
        .verify(&password, &user.password_hash)
        .await
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(ApiError::invalid_credentials());
    }

    let token = state
        .sessions
        .issue_token(user.id)
        .map_err(|e| ApiError::internal(SERVER_ERROR, e))?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(TokenBody { token }))
}
