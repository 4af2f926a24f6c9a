//! Authentication API service backed by the console HTTP client

use crate::auth::AuthApi;
use async_trait::async_trait;
use console_core::{ApiConfig, AuthApiError};
use console_http::{ClientError, ConsoleClient};

/// `AuthApi` over the console's `/auth` endpoints
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: ConsoleClient,
}

impl HttpAuthApi {
    /// Wrap an already configured client
    pub const fn new(client: ConsoleClient) -> Self {
        Self { client }
    }

    /// Build the client from the `[api]` config section
    ///
    /// An empty base URL means the page's own origin in the browser. Native
    /// builds have no origin to fall back to and require one.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = if config.base_url.trim().is_empty() {
            default_base_url()?
        } else {
            config.base_url.clone()
        };

        let mut builder = ConsoleClient::builder().base_url(base_url);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        debug!(base_url = client.base_url(), "auth api client ready");

        Ok(Self::new(client))
    }

    /// Underlying HTTP client
    pub const fn client(&self) -> &ConsoleClient {
        &self.client
    }
}

#[cfg(target_arch = "wasm32")]
fn default_base_url() -> Result<String, ClientError> {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .ok_or_else(|| ClientError::Configuration("window origin unavailable".into()))
}

#[cfg(not(target_arch = "wasm32"))]
fn default_base_url() -> Result<String, ClientError> {
    Err(ClientError::Configuration(
        "api.base_url is required outside the browser".into(),
    ))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AuthApi for HttpAuthApi {
    async fn login(&self, password: &str) -> Result<(), AuthApiError> {
        Ok(self.client.login(password).await?)
    }

    async fn logout(&self) -> Result<(), AuthApiError> {
        Ok(self.client.logout().await?)
    }

    async fn check_auth(&self) -> Result<(), AuthApiError> {
        Ok(self.client.check_auth().await?)
    }
}
