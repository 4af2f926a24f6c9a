//! Configuration for tracing and instrumentation

use crate::config::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Main instrumentation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Service name attached to the root span
    pub service_name: String,
    /// Log level filter (e.g., "info", "debug", "console_frontend_common=trace")
    pub log_level: String,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            service_name: "console".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl InstrumentationConfig {
    /// Create configuration from environment variables
    ///
    /// Supports the following environment variables:
    /// - `SERVICE_NAME`: Service name
    /// - `RUST_LOG`: Log level filter
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let service_name = std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name);
        let log_level = std::env::var("RUST_LOG").unwrap_or(defaults.log_level);

        Self {
            service_name,
            log_level,
        }
    }

    /// Create configuration from the `[logging]` section of the console config
    pub fn from_logging(logging: &LoggingConfig) -> Self {
        Self {
            log_level: logging.level.clone(),
            ..Self::default()
        }
    }

    /// Development configuration with verbose console crate output
    pub fn dev() -> Self {
        Self {
            log_level: "console_frontend_common=trace,console_http=debug,info".to_string(),
            ..Self::default()
        }
    }
}
