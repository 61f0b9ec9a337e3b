//! Shared Error Bodies
//!
//! The API reports problems in two JSON shapes:
//!
//! - `{"errors": [{"msg": ..., "param": ..., "location": ...}]}` for field
//!   validation failures and business-rule rejections (duplicate email,
//!   invalid credentials). `param` and `location` are only present for field
//!   errors.
//! - `{"msg": ...}` for authorization failures and missing profiles.
//!
//! # Usage
//!
//! ```rust
//! use devconnector::shared::error::{ErrorItem, ErrorList};
//!
//! let body = ErrorList::single(ErrorItem::message("Invalid"));
//! assert_eq!(body.errors[0].msg, "Invalid");
//! ```

use serde::{Deserialize, Serialize};

/// One entry of an `errors` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    /// Human-readable message
    pub msg: String,
    /// Request field the message refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Where the field was read from (always `body` for this API)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ErrorItem {
    /// Create an error that is not tied to a field
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: None,
            location: None,
        }
    }

    /// Create an error for a request body field
    pub fn field(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: Some(param.into()),
            location: Some("body".to_string()),
        }
    }
}

/// `{"errors": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorList {
    pub errors: Vec<ErrorItem>,
}

impl ErrorList {
    pub fn single(item: ErrorItem) -> Self {
        Self { errors: vec![item] }
    }
}

/// `{"msg": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub msg: String,
}

impl MessageBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// `{"token": ...}`, returned by registration and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBody {
    pub token: String,
}
