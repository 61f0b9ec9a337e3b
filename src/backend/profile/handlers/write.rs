/**
 * Profile Write Handlers
 *
 * - `POST /api/profile` (protected) - create or update the caller's profile
 * - `DELETE /api/profile` (protected) - delete the caller's profile and account
 */

use axum::{extract::State, response::Json};

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::middleware::validation::ValidatedJson;
use crate::backend::profile::handlers::types::ProfileForm;
use crate::backend::profile::profiles::{Profile, ProfilePatch};
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;
use crate::shared::MessageBody;

/// Create or update the current user's profile
///
/// Fields left empty keep their stored values.
pub async fn upsert_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    ValidatedJson(form): ValidatedJson<ProfileForm>,
) -> Result<Json<Profile>, ApiError> {
    let patch = ProfilePatch::from(form);

    let profile = state
        .store
        .upsert_by_user(auth.user_id, patch)
        .await
        .map_err(|e| match e {
            StoreError::UnknownUser(id) => {
                tracing::warn!("Profile write for deleted user: {}", id);
                ApiError::invalid_token()
            }
            other => ApiError::internal("Server Error (Profile POST)", other),
        })?;

    tracing::info!("Profile saved for user: {}", auth.user_id);

    Ok(Json(profile))
}

/// Delete the current user's profile and account
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<MessageBody>, ApiError> {
    let user = state
        .store
        .delete_account(auth.user_id)
        .await
        .map_err(|e| ApiError::internal("Server Error (Profile DELETE)", e))?
        .ok_or_else(|| {
            tracing::warn!("Delete requested for missing user: {}", auth.user_id);
            ApiError::invalid_token()
        })?;

    tracing::info!("Deleted account: {}", user.id);

    Ok(Json(MessageBody::new(format!("User {} deleted", user.name))))
}
