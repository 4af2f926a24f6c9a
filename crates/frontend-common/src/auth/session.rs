//! Cached view of whether the console session is still valid
//!
//! Route guards call [`AuthSessionCache::check_auth`] on every navigation.
//! Asking the server each time would be wasteful, so a successful
//! verification is trusted for a fixed window (10 s by default) measured from
//! the moment it completed. Cache hits do not move that checkpoint.
//!
//! When the window has lapsed, the first caller starts a verification and
//! every caller arriving before it completes awaits the same shared future,
//! so the server sees one request no matter how many components ask. The
//! verification runs as its own task, so callers that stop waiting do not
//! stall it.

use super::api::AuthApi;
use crate::clock::{Clock, SystemClock};
use crate::runtime::{self, BoxFuture};
use console_core::config::DEFAULT_AUTH_CACHE_WINDOW_MS;
use console_core::{AuthApiError, AuthCacheConfig};
use futures::FutureExt;
use futures::future::Shared;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::watch;

type CheckHandle = Shared<BoxFuture<'static, bool>>;

/// Session flags the render layer binds to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthFlags {
    pub is_logged_in: bool,
    pub is_loading: bool,
}

#[derive(Default)]
struct SessionState {
    is_logged_in: bool,
    /// Logins currently running; `is_loading` is this being non-zero
    logins_in_progress: usize,
    /// Unix millis of the last completed verification, 0 if none
    last_checked_at: u64,
    in_flight: Option<InFlightCheck>,
    /// Bumped per verification and on reset, to recognise stale completions
    generation: u64,
}

struct InFlightCheck {
    generation: u64,
    handle: CheckHandle,
}

impl SessionState {
    const fn flags(&self) -> AuthFlags {
        AuthFlags {
            is_logged_in: self.is_logged_in,
            is_loading: self.logins_in_progress > 0,
        }
    }
}

struct Inner {
    api: Arc<dyn AuthApi>,
    clock: Arc<dyn Clock>,
    cache_window_ms: u64,
    state: Mutex<SessionState>,
    flags: watch::Sender<AuthFlags>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &SessionState) {
        let flags = state.flags();
        self.flags.send_if_modified(|current| {
            let changed = *current != flags;
            *current = flags;
            changed
        });
    }

    fn cache_valid(&self, state: &SessionState) -> bool {
        state.is_logged_in
            && self.clock.now_ms().saturating_sub(state.last_checked_at) < self.cache_window_ms
    }

    fn start_check(self: &Arc<Self>, state: &mut SessionState) -> CheckHandle {
        state.generation += 1;
        let generation = state.generation;
        let api = Arc::clone(&self.api);
        let session: Weak<Self> = Arc::downgrade(self);

        let handle = runtime::boxed(async move {
            let result = api.check_auth().await;
            if let Err(error) = &result {
                debug!(%error, "session check failed");
            }
            let valid = result.is_ok();
            if let Some(inner) = session.upgrade() {
                inner.finish_check(generation, valid);
            }
            valid
        })
        .shared();

        // Runs to completion even if every caller stops waiting
        let driver = handle.clone();
        if !runtime::spawn_detached(async move {
            driver.await;
        }) {
            trace!(generation, "no runtime, session check runs while awaited");
        }

        state.in_flight = Some(InFlightCheck {
            generation,
            handle: handle.clone(),
        });
        debug!(generation, "session check started");
        handle
    }

    fn finish_check(&self, generation: u64, valid: bool) {
        let mut state = self.lock();
        let current = state
            .in_flight
            .as_ref()
            .is_some_and(|check| check.generation == generation);
        if !current {
            trace!(generation, "discarding result of a check started before reset");
            return;
        }

        state.in_flight = None;
        state.is_logged_in = valid;
        state.last_checked_at = self.clock.now_ms();
        self.publish(&state);
        debug!(generation, valid, "session check finished");
    }
}

/// Marks a login as running for as long as it lives
struct LoadingGuard<'a> {
    inner: &'a Inner,
}

impl<'a> LoadingGuard<'a> {
    fn start(inner: &'a Inner) -> Self {
        let mut state = inner.lock();
        state.logins_in_progress += 1;
        inner.publish(&state);
        Self { inner }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.inner.lock();
        state.logins_in_progress = state.logins_in_progress.saturating_sub(1);
        self.inner.publish(&state);
    }
}

/// Clears the local session when the logout call ends, however it ends
struct LogoutGuard<'a> {
    inner: &'a Inner,
}

impl Drop for LogoutGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.inner.lock();
        state.is_logged_in = false;
        state.last_checked_at = 0;
        self.inner.publish(&state);
    }
}

/// Client-side cache of the authentication status
///
/// Clones share state, so a single instance can be handed to every component.
#[derive(Clone)]
pub struct AuthSessionCache {
    inner: Arc<Inner>,
}

impl AuthSessionCache {
    /// Create a cache over `api` with the default 10 s window and the system clock
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self::builder(api).build()
    }

    /// Start building a cache over `api`
    pub fn builder(api: Arc<dyn AuthApi>) -> AuthSessionCacheBuilder {
        AuthSessionCacheBuilder {
            api,
            clock: None,
            cache_window: None,
        }
    }

    /// Log in and confirm the server accepted the new session
    ///
    /// On failure at either step the session is marked logged out and the
    /// error is returned unchanged. `is_loading` covers the whole call.
    pub async fn login(&self, password: &str) -> Result<(), AuthApiError> {
        let _loading = LoadingGuard::start(&self.inner);

        let result = async {
            self.inner.api.login(password).await?;
            self.inner.api.check_auth().await
        }
        .await;

        let mut state = self.inner.lock();
        match &result {
            Ok(()) => {
                state.is_logged_in = true;
                state.last_checked_at = self.inner.clock.now_ms();
                debug!("login succeeded");
            }
            Err(error) => {
                state.is_logged_in = false;
                debug!(%error, "login failed");
            }
        }
        self.inner.publish(&state);
        drop(state);

        result
    }

    /// End the session
    ///
    /// The local session is cleared even when the remote call fails; the
    /// remote error is still returned.
    pub async fn logout(&self) -> Result<(), AuthApiError> {
        let result = {
            let _reset = LogoutGuard { inner: &self.inner };
            self.inner.api.logout().await
        };

        match &result {
            Ok(()) => debug!("logged out"),
            Err(error) => warn!(%error, "remote logout failed, local session cleared anyway"),
        }
        result
    }

    /// Whether the session is valid, asking the server only when the cache has lapsed
    ///
    /// Never fails: a verification error counts as logged out.
    pub async fn check_auth(&self) -> bool {
        let handle = {
            let mut state = self.inner.lock();
            if self.inner.cache_valid(&state) {
                trace!("session cache hit");
                return true;
            }

            let joined = state.in_flight.as_ref().map(|check| {
                trace!(generation = check.generation, "joining in-flight session check");
                check.handle.clone()
            });
            match joined {
                Some(handle) => handle,
                None => self.inner.start_check(&mut state),
            }
        };

        handle.await
    }

    /// Whether the last known state is logged in
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.inner.lock().is_logged_in
    }

    /// Whether a login is running
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.lock().logins_in_progress > 0
    }

    /// Unix millis of the last completed verification, 0 if none
    #[must_use]
    pub fn last_checked_at(&self) -> u64 {
        self.inner.lock().last_checked_at
    }

    /// Whether a verification is currently running
    #[must_use]
    pub fn check_in_flight(&self) -> bool {
        self.inner.lock().in_flight.is_some()
    }

    /// Current flags
    #[must_use]
    pub fn flags(&self) -> AuthFlags {
        self.inner.lock().flags()
    }

    /// Subscribe to flag changes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthFlags> {
        self.inner.flags.subscribe()
    }

    /// Configured cache window
    #[must_use]
    pub fn cache_window(&self) -> Duration {
        Duration::from_millis(self.inner.cache_window_ms)
    }

    /// Return to the initial logged-out state for test isolation
    ///
    /// A verification still running will not write its result back.
    pub fn reset(&self) {
        let mut state = self.inner.lock();
        let generation = state.generation + 1;
        *state = SessionState {
            generation,
            ..SessionState::default()
        };
        self.inner.publish(&state);
        debug!("auth session cache reset");
    }
}

/// Builder for `AuthSessionCache`
pub struct AuthSessionCacheBuilder {
    api: Arc<dyn AuthApi>,
    clock: Option<Arc<dyn Clock>>,
    cache_window: Option<Duration>,
}

impl AuthSessionCacheBuilder {
    /// Use a specific clock
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set how long a verification is trusted
    #[must_use]
    pub fn cache_window(mut self, window: Duration) -> Self {
        self.cache_window = Some(window);
        self
    }

    /// Take the cache window from the `[auth]` config section
    #[must_use]
    pub fn config(self, config: &AuthCacheConfig) -> Self {
        self.cache_window(config.cache_window())
    }

    /// Build the cache
    #[must_use]
    pub fn build(self) -> AuthSessionCache {
        let cache_window_ms = self.cache_window.map_or(DEFAULT_AUTH_CACHE_WINDOW_MS, |window| {
            u64::try_from(window.as_millis()).unwrap_or(u64::MAX)
        });
        let (flags, _) = watch::channel(AuthFlags::default());

        AuthSessionCache {
            inner: Arc::new(Inner {
                api: self.api,
                clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
                cache_window_ms,
                state: Mutex::new(SessionState::default()),
                flags,
            }),
        }
    }
}
