/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Users and Authentication
 * - `POST /api/users` - Register
 * - `POST /api/auth` - Login
 * - `GET /api/auth` - Current user (requires authentication)
 *
 * ## Profiles
 * - `GET /api/profile` - All profiles
 * - `POST /api/profile` - Create or update own profile (requires authentication)
 * - `DELETE /api/profile` - Delete own profile and account (requires authentication)
 * - `GET /api/profile/me` - Own profile (requires authentication)
 * - `GET /api/profile/user/{user_id}` - Profile of a user
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::profile::handlers::{
    delete_account, get_my_profile, get_profile_by_user, list_profiles, upsert_profile,
};
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected methods get `auth_middleware` as a route layer. Public and
/// protected methods that share a path are merged, so the layer only runs
/// for the protected ones.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let require_auth = || from_fn_with_state(state.clone(), auth_middleware);

    router
        .route("/api/users", post(register))
        .route(
            "/api/auth",
            post(login).merge(get(get_me).route_layer(require_auth())),
        )
        .route(
            "/api/profile",
            get(list_profiles).merge(
                post(upsert_profile)
                    .delete(delete_account)
                    .route_layer(require_auth()),
            ),
        )
        .route(
            "/api/profile/me",
            get(get_my_profile).route_layer(require_auth()),
        )
        .route("/api/profile/user/{user_id}", get(get_profile_by_user))
}
