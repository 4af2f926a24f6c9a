//! Services talking to the console API

pub mod auth;

pub use auth::HttpAuthApi;
