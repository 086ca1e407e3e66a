//! Observability error types.

use thiserror::Error;

/// Errors raised while installing the log subscriber.
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Filter directives failed to parse.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber is already installed.
    #[error("Log subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}
