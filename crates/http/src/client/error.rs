//! Client error types

use console_core::AuthApiError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether the server refused the credentials or the session
    pub const fn is_auth_rejected(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed(_) | Self::Forbidden(_) | Self::BadRequest(_)
        )
    }
}

impl From<ClientError> for AuthApiError {
    fn from(err: ClientError) -> Self {
        if err.is_auth_rejected() {
            Self::Auth(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, "nope".into()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_GATEWAY, "upstream".into()),
            ClientError::ServerError { status: 502, .. }
        ));
    }

    #[test]
    fn test_auth_api_error_mapping() {
        let rejected: AuthApiError =
            ClientError::from_status(StatusCode::UNAUTHORIZED, "bad password".into()).into();
        assert!(rejected.is_auth());

        let forbidden: AuthApiError =
            ClientError::from_status(StatusCode::FORBIDDEN, "expired".into()).into();
        assert!(forbidden.is_auth());

        let server: AuthApiError =
            ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()).into();
        assert!(server.is_transport());

        let missing: AuthApiError =
            ClientError::from_status(StatusCode::NOT_FOUND, "no route".into()).into();
        assert!(missing.is_transport());

        let config: AuthApiError = ClientError::Configuration("no base url".into()).into();
        assert!(config.is_transport());
    }
}
