/**
 * Router Configuration
 *
 * Combines the route groups into the application router and adds
 * request tracing and the 404 fallback.
 */

use axum::{http::StatusCode, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **Root**: `GET /` answers with a plain-text greeting
/// 2. **API Routes**: users, authentication, profiles
/// 3. **Fallback**: 404 for unknown routes
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new().route("/", get(|| async { "Hello World!" }));

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
