//! Console core types and utilities

pub mod config;
pub mod error;
pub mod tracing;
pub mod validation;

pub use config::{ApiConfig, AuthCacheConfig, ConsoleConfig, LoggingConfig, ToastConfig};
pub use error::{AuthApiError, CoreError, CoreResult};
pub use validation::ValidateConfig;
