/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require user
 * authentication. It reads the session token from the `x-auth-token` header
 * (or, failing that, an `Authorization: Bearer` header), verifies it, and
 * makes the user id available to handlers.
 *
 * No server-side session exists; every request is verified on its own.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::ApiError;

/// Header carrying the session token
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// 1. Extracts the token from the request headers
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions
///
/// Responds 401 with `{"msg": ...}` if the token is missing or invalid.
pub async fn auth_middleware(
    State(sessions): State<Arc<SessionKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing auth token");
        ApiError::missing_token()
    })?;

    let user_id = sessions.verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        ApiError::invalid_token()
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Find the session token in the request headers
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let custom = headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty());

    custom.or_else(|| {
        headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
    })
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind `auth_middleware`; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::missing_token()
            })?;

        Ok(AuthUser(user))
    }
}
