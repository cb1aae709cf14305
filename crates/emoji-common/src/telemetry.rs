//! Tracing setup for binaries built on the emoji crates.
//!
//! # Usage
//!
//! ```ignore
//! use emoji_common::telemetry::{self, TelemetryConfig};
//!
//! fn main() {
//!     telemetry::init(TelemetryConfig::from_env("emoji-cli"));
//!     tracing::info!("started");
//! }
//! ```

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the startup log line
    pub service_name: String,
    /// Console log level (default: INFO, DEBUG in debug builds)
    pub console_level: Level,
}

impl TelemetryConfig {
    /// Load config from the environment.
    ///
    /// - `RUST_LOG`: Standard env filter (optional, overrides console_level)
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        Self {
            service_name: service_name.into(),
            console_level,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.console_level = level;
        self
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(config: TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.console_level.as_str().to_lowercase()));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_filter(env_filter);

    match tracing_subscriber::registry().with(console_layer).try_init() {
        Ok(()) => tracing::debug!(service = %config.service_name, "telemetry initialized"),
        Err(e) => tracing::debug!(error = %e, "telemetry already initialized"),
    }
}
