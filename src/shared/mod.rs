//! Shared Module
//!
//! This module contains the wire types that describe response bodies of the
//! HTTP API. They carry no server-side dependencies, so API clients and tests
//! can deserialize responses with the same definitions the server serializes.

/// Error and message bodies
pub mod error;

/// Re-export commonly used types for convenience
pub use error::{ErrorItem, ErrorList, MessageBody, TokenBody};
