//! Logging setup for the ARNGREN.net storefront.
//!
//! Library crates emit plain `tracing` events. This crate installs the
//! subscriber that renders them:
//! - `LogConfig` - level, format and filter directives
//! - `init` - registers an `EnvFilter` plus a JSON or human `fmt` layer
//! - `ConsoleWriter` - routes lines to the browser console (wasm32 only)

#[cfg(target_arch = "wasm32")]
mod console;
mod error;
mod logging;

#[cfg(target_arch = "wasm32")]
pub use console::ConsoleWriter;
pub use error::ObservabilityError;
pub use logging::*;
