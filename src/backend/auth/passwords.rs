/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both operations are CPU-bound, so they
 * run on tokio's blocking thread pool instead of an async worker.
 */

use thiserror::Error;

/// Work factor used unless configured otherwise
pub const DEFAULT_COST: u32 = 10;

/// Lowest work factor bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Password hashing failures
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// bcrypt hasher with a fixed cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt
    ///
    /// # Returns
    /// The bcrypt digest string, safe to persist
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let digest = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(digest)
    }

    /// Check a password against a stored digest
    ///
    /// A mismatch is `Ok(false)`; only a malformed digest is an error.
    pub async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let digest = digest.to_owned();
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest)).await??;
        Ok(valid)
    }
}
