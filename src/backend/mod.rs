//! Backend Module
//!
//! Server-side code for the devconnector API.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state and startup
//! - **`routes`** - Router assembly
//! - **`auth`** - Users, passwords, session tokens and auth handlers
//! - **`profile`** - Profiles and profile handlers
//! - **`store`** - PostgreSQL and in-memory storage
//! - **`middleware`** - Token verification and body validation
//! - **`error`** - `ApiError` and its HTTP responses

pub mod auth;
pub mod error;
pub mod middleware;
pub mod profile;
pub mod routes;
pub mod server;
pub mod store;
