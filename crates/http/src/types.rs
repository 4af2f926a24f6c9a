//! Request types for the authentication endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Login request body
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

impl LoginRequest {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }
}

// Keeps the password out of logs and panic messages
impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_serializes_password() {
        let body = serde_json::to_value(LoginRequest::new("secret")).unwrap();
        assert_eq!(body, serde_json::json!({ "password": "secret" }));
    }

    #[test]
    fn test_login_request_debug_redacts_password() {
        let debug = format!("{:?}", LoginRequest::new("secret"));
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
