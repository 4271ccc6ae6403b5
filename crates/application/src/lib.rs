//! Application layer - Use cases and orchestration
//!
//! Defines the ports the clinic search pipeline talks through and the
//! services that sequence geocoding, nearby search, and per-place enrichment.

pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, LookupError};
pub use ports::*;
pub use services::*;
