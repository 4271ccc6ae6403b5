//! Geocoding port
//!
//! Resolves free-form place text to a single coordinate.

use async_trait::async_trait;
use domain::value_objects::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::LookupError;

/// Port for text-to-coordinate resolution
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a query to a coordinate
    ///
    /// When the provider returns several candidates only the first one is
    /// used. Zero candidates yield `LookupError::NotFound`. No retries.
    async fn resolve(&self, query: &str) -> Result<Coordinate, LookupError>;
}
