//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and its
//! conversion into an HTTP response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - `ApiError` definition and constructors
//! └── conversion.rs - `IntoResponse` implementation
//! ```
//!
//! # Error Categories
//!
//! - **Validation** - malformed or missing input fields (400, list of field errors)
//! - **Rejected** - business-rule failures such as a taken email (400, `errors` list)
//! - **NotFound** - a missing profile (400, `{msg}`)
//! - **Unauthorized** - missing, invalid or expired token (401, `{msg}`)
//! - **Internal** - store or hashing failures (500, plain text, detail logged)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, BoxError};
