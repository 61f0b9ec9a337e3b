//! Route Configuration Module
//!
//! - **`router`** - Main router creation, tracing and fallback
//! - **`api_routes`** - `/api/users`, `/api/auth` and `/api/profile`
//!
//! Protected routes read the session token from `x-auth-token`; see
//! `backend::middleware::auth`.

/// Main router creation
pub mod router;

/// API endpoints
pub mod api_routes;

pub use router::create_router;
