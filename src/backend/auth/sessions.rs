/**
 * Session Tokens
 *
 * This module issues and verifies the signed bearer tokens that identify a
 * user on protected routes. Tokens are HS256 JWTs carrying
 * `{ "user": { "id": ... }, "iat": ..., "exp": ... }`.
 *
 * The signing secret comes from `ServerConfig` and is held by `SessionKeys`
 * for the process lifetime.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime unless configured otherwise (10 hours)
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 36_000;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identity the token asserts
    pub user: ClaimsUser,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimsUser {
    pub id: String,
}

/// Token failures
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Bad signature, expired, malformed, or not carrying a user id
    #[error("invalid token: {0}")]
    InvalidToken(String),
}

/// Signing and verification keys
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl SessionKeys {
    /// Create keys from the shared secret
    ///
    /// # Arguments
    /// * `secret` - HMAC secret
    /// * `ttl_secs` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Create a token for a user, valid from now
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, SessionError> {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        self.issue_token_at(user_id, now)
    }

    /// Create a token as if it had been issued at `issued_at` (Unix seconds)
    pub fn issue_token_at(&self, user_id: Uuid, issued_at: u64) -> Result<String, SessionError> {
        let claims = Claims {
            user: ClaimsUser {
                id: user_id.to_string(),
            },
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl_secs),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(SessionError::Signing)
    }

    /// Verify a token and return the user id it carries
    pub fn verify_token(&self, token: &str) -> Result<Uuid, SessionError> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| SessionError::InvalidToken(e.to_string()))?;

        Uuid::parse_str(&token_data.claims.user.id)
            .map_err(|e| SessionError::InvalidToken(format!("invalid user id in token: {}", e)))
    }
}
