//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Google Maps
//! lookups, an in-memory map surface, and a fixed device location. Also owns
//! configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LocationConfig, SearchConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
