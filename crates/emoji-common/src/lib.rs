//! Shared plumbing for the emoji suggestion crates: errors, configuration
//! files, tracing setup and timing helpers.

pub mod config;
pub mod error;
pub mod perf;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use crate::config::{ConfigFormat, FileStore, Loader, Saver};
pub use crate::error::{Error, ParseError, ParseErrorKind, SerDeError};

pub type Result<T, E = Error> = std::result::Result<T, E>;
