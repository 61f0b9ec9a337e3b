/**
 * Profile Read Handlers
 *
 * - `GET /api/profile/me` (protected) - the caller's profile
 * - `GET /api/profile` - every profile, oldest first
 * - `GET /api/profile/user/{user_id}` - one user's profile
 *
 * All three return profiles joined with the owner's name and avatar.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::profile::profiles::OwnedProfile;
use crate::backend::server::state::AppState;

/// Get the current user's profile
pub async fn get_my_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<OwnedProfile>, ApiError> {
    let profile = state
        .store
        .find_by_user(auth.user_id)
        .await
        .map_err(|e| ApiError::internal("Server Error (Profile GET)", e))?
        .ok_or_else(ApiError::no_profile_for_user)?;

    Ok(Json(profile))
}

/// List all profiles
pub async fn list_profiles(State(state): State<AppState>) -> Result<Json<Vec<OwnedProfile>>, ApiError> {
    let profiles = state
        .store
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Server Error (Profile GET All)", e))?;

    tracing::debug!("Listing {} profiles", profiles.len());

    Ok(Json(profiles))
}

/// Get a profile by its owner's id
///
/// An id that is not a UUID is reported like a missing profile.
pub async fn get_profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<OwnedProfile>, ApiError> {
    let user_id = Uuid::parse_str(&user_id).map_err(|_| {
        tracing::debug!("Malformed user id: {}", user_id);
        ApiError::profile_not_found()
    })?;

    let profile = state
        .store
        .find_by_user(user_id)
        .await
        .map_err(|e| ApiError::internal("Server Error (Profile GET by ID)", e))?
        .ok_or_else(ApiError::profile_not_found)?;

    Ok(Json(profile))
}
