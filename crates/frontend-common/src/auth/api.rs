//! Contract of the external authentication API

use crate::runtime::{MaybeSend, MaybeSync};
use async_trait::async_trait;
use console_core::AuthApiError;

/// Remote authentication operations the session cache builds on
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AuthApi: MaybeSend + MaybeSync {
    /// Establish a session with the console password
    async fn login(&self, password: &str) -> Result<(), AuthApiError>;

    /// End the current session
    async fn logout(&self) -> Result<(), AuthApiError>;

    /// Succeeds while the server still accepts the current session
    async fn check_auth(&self) -> Result<(), AuthApiError>;
}
