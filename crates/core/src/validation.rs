//! Configuration validation support

use crate::error::CoreResult;
use serde::{Deserialize, Serialize};

/// Trait for validating configuration values
pub trait ValidateConfig: Serialize + for<'de> Deserialize<'de> {
    /// Validate the configuration
    ///
    /// Returns Ok(()) if valid, or the first offending setting
    fn validate(&self) -> CoreResult<()>;
}

/// Common validation helpers
pub mod validators {
    use crate::error::{CoreError, CoreResult};

    /// Validate that a string is an absolute http(s) URL
    pub fn validate_http_url(url: &str, field: &str) -> CoreResult<()> {
        let parsed = url::Url::parse(url)
            .map_err(|e| CoreError::invalid_config(field, format!("invalid URL - {e}")))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CoreError::invalid_config(
                field,
                format!("unsupported scheme '{scheme}', expected http or https"),
            )),
        }
    }

    /// Validate that a value is one of the allowed options
    pub fn validate_one_of(value: &str, allowed: &[&str], field: &str) -> CoreResult<()> {
        if !allowed.contains(&value) {
            return Err(CoreError::invalid_config(
                field,
                format!("must be one of {allowed:?}"),
            ));
        }
        Ok(())
    }

    /// Validate that a value is within range
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> CoreResult<()> {
        if value < min || value > max {
            return Err(CoreError::invalid_config(
                field,
                format!("must be between {min} and {max}"),
            ));
        }
        Ok(())
    }
}
