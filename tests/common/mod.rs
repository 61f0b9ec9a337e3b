//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-process application backed by the in-memory store
//! - PostgreSQL fixtures, active when `DATABASE_URL` is set
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;

// Re-export commonly used utilities
pub use app::*;
pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
