//! Client-side state stores of the console: toast notifications and the
//! cached authentication session
//!
//! Both stores publish changes through `tokio::sync::watch` channels, so any
//! render layer can subscribe without this crate knowing about it.

#[macro_use]
extern crate tracing;

pub mod auth;
pub mod clock;
pub mod runtime;
pub mod services;
pub mod state;
pub mod toast;

pub use auth::{AuthApi, AuthFlags, AuthSessionCache, AuthSessionCacheBuilder};
pub use clock::{Clock, ManualClock, SystemClock};
pub use services::HttpAuthApi;
pub use state::ConsoleState;
pub use toast::{Toast, ToastId, ToastKind, ToastRegistry};
