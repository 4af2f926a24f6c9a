//! Deferred work on whichever event loop hosts the frontend
//!
//! Native builds run on tokio; wasm32 builds run on the browser event loop.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Boxed future that is `Send` wherever the target can move futures between threads
#[cfg(not(target_arch = "wasm32"))]
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Boxed future that is `Send` wherever the target can move futures between threads
#[cfg(target_arch = "wasm32")]
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// `Send` on native targets, no bound on wasm32
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + ?Sized> MaybeSend for T {}

/// `Send` on native targets, no bound on wasm32
#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSend for T {}

/// `Sync` on native targets, no bound on wasm32
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSync: Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Sync + ?Sized> MaybeSync for T {}

/// `Sync` on native targets, no bound on wasm32
#[cfg(target_arch = "wasm32")]
pub trait MaybeSync {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSync for T {}

/// Box a future into the target's `BoxFuture`
pub fn boxed<'a, F>(future: F) -> BoxFuture<'a, F::Output>
where
    F: Future + MaybeSend + 'a,
{
    Box::pin(future)
}

/// Drive `future` to completion in the background
///
/// Returns `false` on native targets when no tokio runtime is running; the
/// future is dropped and the caller has to drive the work itself.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_detached<F>(future: F) -> bool
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
            true
        }
        Err(_) => false,
    }
}

/// Drive `future` to completion in the background
#[cfg(target_arch = "wasm32")]
pub fn spawn_detached<F>(future: F) -> bool
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
    true
}

/// Run `task` once `delay` has elapsed, without blocking the caller
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_after<F>(delay: Duration, task: F)
where
    F: FnOnce() + Send + 'static,
{
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        return;
    }

    warn!("no tokio runtime available, deferring on a timer thread");
    let spawned = std::thread::Builder::new()
        .name("console-timer".to_string())
        .spawn(move || {
            std::thread::sleep(delay);
            task();
        });
    if let Err(error) = spawned {
        error!(%error, "failed to spawn timer thread, deferred task dropped");
    }
}

/// Run `task` once `delay` has elapsed, without blocking the caller
#[cfg(target_arch = "wasm32")]
pub fn spawn_after<F>(delay: Duration, task: F)
where
    F: FnOnce() + Send + 'static,
{
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(millis).await;
        task();
    });
}
