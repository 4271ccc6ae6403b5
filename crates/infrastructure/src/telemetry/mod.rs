//! Logging setup
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` plus a text or
//! JSON formatting layer writing to stderr.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging};
