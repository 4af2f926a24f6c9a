//! Authentication state for the console
//!
//! [`AuthSessionCache`] tracks whether the operator is logged in and keeps
//! route guards from asking the server on every navigation. It talks to the
//! server through the [`AuthApi`] trait; `HttpAuthApi` in `services` is the
//! implementation used by the app.

pub mod api;
mod session;

pub use api::AuthApi;
pub use session::{AuthFlags, AuthSessionCache, AuthSessionCacheBuilder};
