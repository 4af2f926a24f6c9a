//! Console configuration
//!
//! Settings are layered: built-in defaults, then an optional `console.toml`,
//! then `CONSOLE_*` environment variables (`__` separates nested keys, so
//! `CONSOLE_API__BASE_URL` sets `api.base_url`).

use crate::error::CoreResult;
use crate::validation::{ValidateConfig, validators};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default lifetime of a toast before it dismisses itself
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;

/// Default window during which a verified session is trusted without asking the server
pub const DEFAULT_AUTH_CACHE_WINDOW_MS: u64 = 10_000;

const MAX_AUTH_CACHE_WINDOW_MS: u64 = 3_600_000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level console configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Authentication API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Toast display settings
    #[serde(default)]
    pub toast: ToastConfig,
    /// Session cache settings
    #[serde(default)]
    pub auth: AuthCacheConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Authentication API settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API; empty means same origin
    #[serde(default)]
    pub base_url: String,
    /// Request timeout in seconds (ignored on wasm32)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Toast display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Lifetime used when a toast is shown without an explicit duration; 0 keeps it until dismissed
    #[serde(default = "default_toast_duration_ms")]
    pub default_duration_ms: u64,
}

/// Session cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCacheConfig {
    /// How long a successful verification is trusted, in milliseconds
    #[serde(default = "default_auth_cache_window_ms")]
    pub cache_window_ms: u64,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_auth_cache_window_ms() -> u64 {
    DEFAULT_AUTH_CACHE_WINDOW_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl Default for AuthCacheConfig {
    fn default() -> Self {
        Self {
            cache_window_ms: default_auth_cache_window_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ApiConfig {
    /// Request timeout as a duration
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AuthCacheConfig {
    /// Cache window as a duration
    #[must_use]
    pub const fn cache_window(&self) -> Duration {
        Duration::from_millis(self.cache_window_ms)
    }
}

impl ConsoleConfig {
    /// Load configuration from defaults, the first config file found, and the environment
    pub fn load() -> CoreResult<Self> {
        let mut builder =
            Config::builder().add_source(Config::try_from(&ConsoleConfig::default())?);

        let config_paths = ["console.toml", "config/console.toml"];
        if let Some(path) = config_paths.iter().find(|path| Path::new(path).exists()) {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("CONSOLE")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file, with environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let config: Self = Config::builder()
            .add_source(Config::try_from(&ConsoleConfig::default())?)
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CONSOLE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl ValidateConfig for ConsoleConfig {
    fn validate(&self) -> CoreResult<()> {
        validators::validate_one_of(&self.logging.level, &LOG_LEVELS, "logging.level")?;

        if !self.api.base_url.is_empty() {
            validators::validate_http_url(&self.api.base_url, "api.base_url")?;
        }
        if let Some(timeout) = self.api.timeout_secs {
            validators::validate_range(timeout, 1, 300, "api.timeout_secs")?;
        }

        validators::validate_range(
            self.auth.cache_window_ms,
            0,
            MAX_AUTH_CACHE_WINDOW_MS,
            "auth.cache_window_ms",
        )?;

        Ok(())
    }
}
