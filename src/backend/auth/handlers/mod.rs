//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports
//! ├── types.rs     - Request and response types
//! ├── register.rs  - POST /api/users
//! ├── login.rs     - POST /api/auth
//! └── me.rs        - GET /api/auth
//! ```
//!
//! Registration and login both answer with `{"token": ...}`; the token is
//! then sent back in the `x-auth-token` header.

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use types::{LoginRequest, RegisterRequest, UserResponse};

pub use login::login;
pub use me::get_me;
pub use register::register;
