//! Common error types shared across the console crates

/// Standard result type for core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while loading and checking the console configuration
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A source could not be read or parsed
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A setting was read but its value is not acceptable
    #[error("Invalid configuration for {field}: {message}")]
    InvalidConfig { field: String, message: String },
}

impl CoreError {
    /// Create an invalid config error for `field`
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending setting, when the value itself was rejected
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidConfig { field, .. } => Some(field),
            Self::Config(_) => None,
        }
    }
}

/// Failures reported by the external authentication API.
///
/// Both variants originate on the far side of the API boundary. `Clone` is
/// required because a single verification result is handed to every caller
/// waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, thiserror::Error)]
pub enum AuthApiError {
    /// Bad credentials, or a session the server no longer accepts
    #[error("Authentication rejected: {0}")]
    Auth(String),

    /// The request never got a usable answer
    #[error("Transport failure: {0}")]
    Transport(String),
}

impl AuthApiError {
    /// Create an authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Whether the server rejected the credentials or session
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Whether the failure happened in transit
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_api_error_kinds() {
        let auth = AuthApiError::auth("invalid password");
        assert!(auth.is_auth());
        assert!(!auth.is_transport());
        assert_eq!(auth.to_string(), "Authentication rejected: invalid password");

        let transport = AuthApiError::transport("connection reset");
        assert!(transport.is_transport());
        assert!(!transport.is_auth());
    }

    #[test]
    fn test_invalid_config_names_field() {
        let err = CoreError::invalid_config("logging.level", "must be one of [\"info\"]");
        assert_eq!(err.field(), Some("logging.level"));
        assert!(err.to_string().starts_with("Invalid configuration for logging.level"));
    }

    #[test]
    fn test_core_error_from_config() {
        let err: CoreError = config::ConfigError::Message("bad key".to_string()).into();
        assert!(matches!(err, CoreError::Config(_)));
        assert_eq!(err.field(), None);
    }
}
