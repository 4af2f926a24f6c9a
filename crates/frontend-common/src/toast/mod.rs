//! Toast notifications
//!
//! Short-lived messages shown on top of the console. Each toast either
//! dismisses itself after its duration or, with a duration of zero, stays
//! until the user closes it.
//!
//! ```ignore
//! let toasts = ToastRegistry::new();
//! let id = toasts.error("Upload failed", Some("Accounts"), Some(0));
//! // ... the user clicks the close button
//! toasts.dismiss(&id);
//! ```

mod registry;

pub use registry::ToastRegistry;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a toast, unique for the lifetime of its registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToastId(String);

impl ToastId {
    pub(crate) fn from_sequence(n: u64) -> Self {
        Self(format!("toast-{n}"))
    }

    /// Get the id as a string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToastId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Visual category of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        })
    }
}

/// A notification as the render layer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub message: String,
    /// Lifetime in milliseconds; 0 means it stays until dismissed
    pub duration_ms: u64,
}

impl Toast {
    /// Whether the toast will remove itself
    #[must_use]
    pub const fn auto_dismisses(&self) -> bool {
        self.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_serializes_for_render_layer() {
        let toast = Toast {
            id: ToastId::from_sequence(7),
            kind: ToastKind::Warning,
            title: None,
            message: "Quota almost used".to_string(),
            duration_ms: 3_000,
        };

        let value = serde_json::to_value(&toast).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "toast-7",
                "kind": "warning",
                "message": "Quota almost used",
                "duration_ms": 3000
            })
        );
    }

    #[test]
    fn test_auto_dismisses() {
        let mut toast = Toast {
            id: ToastId::from_sequence(1),
            kind: ToastKind::Error,
            title: Some("Sync".to_string()),
            message: "Connection lost".to_string(),
            duration_ms: 0,
        };
        assert!(!toast.auto_dismisses());
        toast.duration_ms = 1;
        assert!(toast.auto_dismisses());
    }
}
