//! Tracing setup shared by the console crates
//!
//! Works on both native targets and wasm32; in the browser the output goes to
//! the developer console.

pub mod config;
pub mod init;

pub use config::InstrumentationConfig;
pub use init::{init_default, init_tracing};
