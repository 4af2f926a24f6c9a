//! Authentication API client methods

use super::{ClientError, ConsoleClient};
use crate::types::LoginRequest;
use reqwest::Method;

impl ConsoleClient {
    /// Log in with the console password; the server answers with a session cookie
    pub async fn login(&self, password: &str) -> Result<(), ClientError> {
        let request = self
            .request(Method::POST, "/auth/login")
            .json(&LoginRequest::new(password));
        self.execute_empty(request).await
    }

    /// End the current session
    pub async fn logout(&self) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/auth/logout");
        self.execute_empty(request).await
    }

    /// Ask the server whether the current session is still valid
    pub async fn check_auth(&self) -> Result<(), ClientError> {
        let request = self.request(Method::GET, "/auth/check");
        self.execute_empty(request).await
    }
}
