//! Log configuration and subscriber installation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::ObservabilityError;

/// Target prefix shared by every workspace crate.
pub const TARGET_PREFIX: &str = "arngren";

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Level as written in filter directives.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (one object per event).
    Json,
    /// Human-readable format (for development).
    #[default]
    Human,
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level for workspace crates.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Full filter directives, overriding `level` when set.
    pub directives: Option<String>,
    /// Prefix events with a timestamp.
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Human,
            directives: None,
            // the browser console stamps its own entries
            timestamps: !cfg!(target_arch = "wasm32"),
        }
    }
}

impl LogConfig {
    /// Directives used when `RUST_LOG` is not set.
    pub fn default_directives(&self) -> String {
        self.directives
            .clone()
            .unwrap_or_else(|| format!("{TARGET_PREFIX}={}", self.level.as_directive()))
    }

    /// Build the filter, preferring `RUST_LOG` where an environment exists.
    pub fn env_filter(&self) -> Result<EnvFilter, ObservabilityError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => Ok(EnvFilter::try_new(self.default_directives())?),
        }
    }
}

/// Build the `fmt` layer for the configured format, writing to `writer`.
pub fn fmt_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);
    match (config.format, config.timestamps) {
        (LogFormat::Json, true) => layer.json().flatten_event(true).boxed(),
        (LogFormat::Json, false) => layer.json().flatten_event(true).without_time().boxed(),
        (LogFormat::Human, true) => layer.boxed(),
        (LogFormat::Human, false) => layer.without_time().boxed(),
    }
}

/// Install the global subscriber.
///
/// Writes to the browser console on wasm32 and to stderr elsewhere.
pub fn init(config: &LogConfig) -> Result<(), ObservabilityError> {
    let filter = config.env_filter()?;

    #[cfg(target_arch = "wasm32")]
    let writer = crate::ConsoleWriter;
    #[cfg(not(target_arch = "wasm32"))]
    let writer = std::io::stderr;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(config, writer))
        .try_init()
        .map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(level = %config.level, format = ?config.format, "logging initialized");
    Ok(())
}
