/**
 * API Error Types
 *
 * `ApiError` is the single error type of the HTTP layer. Handlers translate
 * store, hashing and token failures into one of its variants, so nothing
 * escapes to the transport layer unhandled.
 *
 * # Status Code Mapping
 *
 * - `Validation` - 400 Bad Request
 * - `Rejected` - 400 Bad Request
 * - `NotFound` - 400 Bad Request (the public API reports missing profiles as 400)
 * - `Unauthorized` - 401 Unauthorized
 * - `Internal` - 500 Internal Server Error
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::ErrorItem;

/// Boxed source error carried by `ApiError::Internal`
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by HTTP handlers and middleware
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more request fields failed validation
    #[error("validation failed: {} field error(s)", .0.len())]
    Validation(Vec<ErrorItem>),

    /// A business rule rejected the request
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The requested record does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Missing, invalid or expired credentials
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Unexpected failure; `context` is the only text sent to the client
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: BoxError,
    },
}

impl ApiError {
    pub fn user_already_exists() -> Self {
        Self::Rejected("User already exists".to_string())
    }

    /// Same message for unknown email and wrong password
    pub fn invalid_credentials() -> Self {
        Self::Rejected("Invalid".to_string())
    }

    pub fn no_profile_for_user() -> Self {
        Self::NotFound("There is no profile for this user".to_string())
    }

    pub fn profile_not_found() -> Self {
        Self::NotFound("Profile not found".to_string())
    }

    pub fn missing_token() -> Self {
        Self::Unauthorized("No token, authorization denied".to_string())
    }

    pub fn invalid_token() -> Self {
        Self::Unauthorized("Token is not valid".to_string())
    }

    /// Wrap an unexpected error
    ///
    /// # Arguments
    ///
    /// * `context` - Plain-text message returned to the client
    /// * `source` - Underlying error, logged but never sent
    pub fn internal(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Internal {
            context,
            source: source.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Rejected(_) | Self::NotFound(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
