//! Custom assertion macros and utilities
//!
//! Provides assertions that print the response body on failure.

use serde_json::Value;

/// Assert a response status, showing the body if it differs
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status,
            $status,
            "Unexpected status, body: {}",
            $response.text()
        );
    };
}

/// Collect the `msg` of every entry in an `{"errors": [...]}` body
pub fn error_messages(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .unwrap_or_else(|| panic!("Expected an errors array, got: {}", body))
        .iter()
        .map(|e| e["msg"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Collect the `param` of every entry in an `{"errors": [...]}` body
pub fn error_params(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .unwrap_or_else(|| panic!("Expected an errors array, got: {}", body))
        .iter()
        .map(|e| e["param"].as_str().unwrap_or_default().to_string())
        .collect()
}
