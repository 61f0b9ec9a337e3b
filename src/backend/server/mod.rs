//! Server Module
//!
//! Startup code: configuration, shared state and app assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports and documentation
//! ├── config.rs   - `ServerConfig` loading (TOML file + environment)
//! ├── state.rs    - `AppState` and `FromRef` implementations
//! └── init.rs     - Store selection and `create_app`
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::load` merges defaults, the
//!    config file and environment variables, then validates
//! 2. **Store**: PostgreSQL (with migrations) or the in-memory store
//! 3. **State Creation**: `AppState` with the store, hasher and session keys
//! 4. **Router Creation**: all routes, middleware and request tracing

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, InitError};
pub use state::AppState;
