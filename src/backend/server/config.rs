/**
 * Server Configuration
 *
 * `ServerConfig` is built once at startup and handed to `create_app`; no
 * component reads the environment on its own.
 *
 * # Configuration Sources
 *
 * 1. Built-in defaults
 * 2. TOML file at `$DEVCONNECTOR_CONFIG`, or `config/default.toml` if it exists
 * 3. Environment variables: `PORT`, `DATABASE_URL`, `JWT_SECRET`,
 *    `BCRYPT_COST`, `TOKEN_TTL_SECS`
 *
 * Later sources override earlier ones. `JWT_SECRET` has no default.
 */

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::backend::auth::passwords::{DEFAULT_COST, MAX_COST, MIN_COST};
use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_SECS;

/// Config file read when `DEVCONNECTOR_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing value: {0}")]
    MissingValue(&'static str),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Process configuration
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// PostgreSQL connection string; the in-memory store is used without it
    pub database_url: Option<String>,
    /// HMAC secret for session tokens
    pub jwt_secret: Option<String>,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Session token lifetime in seconds
    pub token_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: None,
            jwt_secret: None,
            bcrypt_cost: DEFAULT_COST,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

// Secrets stay out of logs
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

impl ServerConfig {
    /// Load defaults, the config file and the process environment, then validate
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var_os("DEVCONNECTOR_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };

        let config = config.with_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Apply environment overrides
    ///
    /// # Arguments
    /// * `lookup` - Returns the value of an environment variable, if set
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(port) = lookup("PORT") {
            self.port = parse_value("PORT", &port)?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = Some(url).filter(|u| !u.is_empty());
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = Some(secret);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = parse_value("BCRYPT_COST", &cost)?;
        }
        if let Some(ttl) = lookup("TOKEN_TTL_SECS") {
            self.token_ttl_secs = parse_value("TOKEN_TTL_SECS", &ttl)?;
        }
        Ok(self)
    }

    /// Check required values and ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt_secret()?;

        if !(MIN_COST..=MAX_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!(
                    "must be between {} and {}",
                    MIN_COST,
                    MAX_COST
                ),
            });
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS",
                message: "must be positive".to_string(),
            });
        }

        Ok(())
    }

    /// The token secret; empty counts as missing
    pub fn jwt_secret(&self) -> Result<&str, ConfigError> {
        self.jwt_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })
}
