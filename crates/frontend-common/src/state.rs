//! Process-wide console state handed to the render layer

use crate::auth::{AuthApi, AuthSessionCache};
use crate::services::HttpAuthApi;
use crate::toast::ToastRegistry;
use console_core::ConsoleConfig;
use console_core::tracing::{InstrumentationConfig, init_tracing};
use console_http::ClientError;
use std::sync::Arc;

/// Shared stores of the console: the toast list and the session cache
///
/// Create one per app and clone it into components; clones share state.
#[derive(Clone)]
pub struct ConsoleState {
    toasts: ToastRegistry,
    auth: AuthSessionCache,
}

impl ConsoleState {
    /// Create the stores over an existing `AuthApi`
    pub fn new(config: &ConsoleConfig, api: Arc<dyn AuthApi>) -> Self {
        Self {
            toasts: ToastRegistry::from_config(&config.toast),
            auth: AuthSessionCache::builder(api).config(&config.auth).build(),
        }
    }

    /// Create the stores with an HTTP client built from `config`
    ///
    /// Also installs logging at `logging.level`, unless the embedding app has
    /// already set up a subscriber.
    pub fn from_config(config: &ConsoleConfig) -> Result<Self, ClientError> {
        if let Err(error) = init_tracing(&InstrumentationConfig::from_logging(&config.logging)) {
            debug!(%error, "keeping the existing tracing subscriber");
        }

        let api = HttpAuthApi::from_config(&config.api)?;
        Ok(Self::new(config, Arc::new(api)))
    }

    /// Toast registry
    pub const fn toasts(&self) -> &ToastRegistry {
        &self.toasts
    }

    /// Session cache
    pub const fn auth(&self) -> &AuthSessionCache {
        &self.auth
    }

    /// Reset both stores, for test isolation
    pub fn reset(&self) {
        self.toasts.reset();
        self.auth.reset();
    }
}
