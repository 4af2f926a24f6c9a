//! Ordered store of the toasts currently on screen

use super::{Toast, ToastId, ToastKind};
use crate::runtime;
use console_core::ToastConfig;
use console_core::config::DEFAULT_TOAST_DURATION_MS;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::watch;

/// Registry of visible toasts, in display order
///
/// Clones share the same list. The list lives in a `watch` channel so the
/// render layer can subscribe and redraw on every change.
#[derive(Clone)]
pub struct ToastRegistry {
    inner: Arc<RegistryInner>,
}

struct RegistryInner {
    toasts: watch::Sender<Vec<Toast>>,
    /// Last id handed out; never rewound, so stale timers cannot hit a newer toast
    last_id: AtomicU64,
    default_duration_ms: u64,
}

impl RegistryInner {
    fn remove(&self, id: &ToastId) -> bool {
        self.toasts.send_if_modified(|toasts| {
            toasts
                .iter()
                .position(|toast| &toast.id == id)
                .map(|pos| toasts.remove(pos))
                .is_some()
        })
    }
}

impl Default for ToastRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastRegistry {
    /// Create an empty registry with the standard 3 second lifetime
    #[must_use]
    pub fn new() -> Self {
        Self::with_default_duration(DEFAULT_TOAST_DURATION_MS)
    }

    /// Create an empty registry whose toasts live `default_duration_ms` unless told otherwise
    #[must_use]
    pub fn with_default_duration(default_duration_ms: u64) -> Self {
        let (toasts, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(RegistryInner {
                toasts,
                last_id: AtomicU64::new(0),
                default_duration_ms,
            }),
        }
    }

    /// Create an empty registry from the `[toast]` config section
    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self::with_default_duration(config.default_duration_ms)
    }

    /// Display a toast and return its id
    ///
    /// With an effective duration above zero the toast removes itself once
    /// the duration has elapsed. `None` uses the registry default.
    pub fn show(
        &self,
        kind: ToastKind,
        message: impl Into<String>,
        title: Option<&str>,
        duration_ms: Option<u64>,
    ) -> ToastId {
        let sequence = self.inner.last_id.fetch_add(1, Ordering::Relaxed) + 1;
        let id = ToastId::from_sequence(sequence);
        let duration_ms = duration_ms.unwrap_or(self.inner.default_duration_ms);

        let toast = Toast {
            id: id.clone(),
            kind,
            title: title.map(str::to_string),
            message: message.into(),
            duration_ms,
        };
        self.inner.toasts.send_modify(|toasts| toasts.push(toast));
        debug!(%id, %kind, duration_ms, "toast shown");

        if duration_ms > 0 {
            let registry: Weak<RegistryInner> = Arc::downgrade(&self.inner);
            let expired = id.clone();
            runtime::spawn_after(Duration::from_millis(duration_ms), move || {
                if let Some(inner) = registry.upgrade()
                    && inner.remove(&expired)
                {
                    trace!(id = %expired, "toast expired");
                }
            });
        }

        id
    }

    /// Show a success toast
    pub fn success(
        &self,
        message: impl Into<String>,
        title: Option<&str>,
        duration_ms: Option<u64>,
    ) -> ToastId {
        self.show(ToastKind::Success, message, title, duration_ms)
    }

    /// Show an error toast
    pub fn error(
        &self,
        message: impl Into<String>,
        title: Option<&str>,
        duration_ms: Option<u64>,
    ) -> ToastId {
        self.show(ToastKind::Error, message, title, duration_ms)
    }

    /// Show a warning toast
    pub fn warning(
        &self,
        message: impl Into<String>,
        title: Option<&str>,
        duration_ms: Option<u64>,
    ) -> ToastId {
        self.show(ToastKind::Warning, message, title, duration_ms)
    }

    /// Show an info toast
    pub fn info(
        &self,
        message: impl Into<String>,
        title: Option<&str>,
        duration_ms: Option<u64>,
    ) -> ToastId {
        self.show(ToastKind::Info, message, title, duration_ms)
    }

    /// Remove a toast
    ///
    /// Returns `false` when the id is not (or no longer) displayed, which is
    /// not an error: the toast may already have expired.
    pub fn dismiss(&self, id: &ToastId) -> bool {
        let removed = self.inner.remove(id);
        if removed {
            debug!(%id, "toast dismissed");
        } else {
            trace!(%id, "dismiss ignored, toast not displayed");
        }
        removed
    }

    /// Snapshot of the visible toasts in display order
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.toasts.borrow().clone()
    }

    /// Look up a visible toast
    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<Toast> {
        self.inner
            .toasts
            .borrow()
            .iter()
            .find(|toast| &toast.id == id)
            .cloned()
    }

    /// Number of visible toasts
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.toasts.borrow().len()
    }

    /// Whether nothing is displayed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.toasts.borrow().is_empty()
    }

    /// Subscribe to changes of the visible list
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.toasts.subscribe()
    }

    /// Remove every toast
    pub fn clear(&self) {
        self.inner.toasts.send_if_modified(|toasts| {
            let changed = !toasts.is_empty();
            toasts.clear();
            changed
        });
    }

    /// Return to the freshly-created state for test isolation
    ///
    /// Ids keep counting up, so timers armed before the reset stay harmless.
    pub fn reset(&self) {
        self.clear();
        debug!("toast registry reset");
    }
}
