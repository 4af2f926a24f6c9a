//! Console HTTP client for the session authentication API
//!
//! The API keeps the session in a cookie: `login` establishes it, `check_auth`
//! asks whether it is still accepted, and `logout` ends it.

#[macro_use]
extern crate tracing;

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::{ConsoleClient, ConsoleClientBuilder};
