//! Middleware Module
//!
//! Request processing that runs before handlers:
//!
//! - **`auth`** - Token verification for protected routes, plus the
//!   `AuthUser` extractor handlers use to read the verified identity
//! - **`validation`** - `ValidatedJson`, a body extractor that runs
//!   `validator` rules and reports field errors

pub mod auth;
pub mod validation;

pub use auth::{auth_middleware, extract_token, AuthUser, AuthenticatedUser, AUTH_TOKEN_HEADER};
pub use validation::{field_errors, ValidatedJson};
