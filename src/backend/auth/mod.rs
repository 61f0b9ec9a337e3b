//! Authentication Module
//!
//! User registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports
//! ├── users.rs      - User model and `UserRepository`
//! ├── passwords.rs  - bcrypt hashing on the blocking pool
//! ├── sessions.rs   - HS256 token issuance and verification
//! ├── avatar.rs     - Gravatar URL derivation
//! └── handlers/     - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user stored → token returned
//! 2. **Login**: email, password → digest verified → token returned
//! 3. **Current user**: token in `x-auth-token` → user returned
//!
//! Tokens carry `{"user": {"id": ...}}` and expire after ten hours by
//! default. Nothing is stored server-side.

/// User data model and repository trait
pub mod users;

/// Password hashing
pub mod passwords;

/// Token generation and validation
pub mod sessions;

/// Gravatar avatars
pub mod avatar;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use handlers::types::{LoginRequest, RegisterRequest, UserResponse};
pub use passwords::PasswordHasher;
pub use sessions::SessionKeys;
pub use users::{NewUser, User, UserRepository};
