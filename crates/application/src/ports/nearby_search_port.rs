//! Nearby search port
//!
//! Finds candidate places around a coordinate.

use async_trait::async_trait;
use domain::{entities::PlaceStub, value_objects::Coordinate};
#[cfg(test)]
use mockall::automock;

use crate::error::LookupError;

/// Search radius around the resolved coordinate
pub const SEARCH_RADIUS_METERS: u32 = 3000;

/// Keyword filter for psychiatric clinics
pub const CLINIC_KEYWORD: &str = "정신과";

/// Provider place category
pub const CLINIC_CATEGORY: &str = "hospital";

/// Parameters of a nearby search
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    /// Center of the search circle
    pub center: Coordinate,
    /// Search radius in meters
    pub radius_meters: u32,
    /// Free-text keyword filter
    pub keyword: String,
    /// Provider category filter
    pub category: String,
}

impl NearbyQuery {
    /// The fixed psychiatric clinic search around a center
    #[must_use]
    pub fn clinics_around(center: Coordinate) -> Self {
        Self {
            center,
            radius_meters: SEARCH_RADIUS_METERS,
            keyword: CLINIC_KEYWORD.to_string(),
            category: CLINIC_CATEGORY.to_string(),
        }
    }
}

/// Port for nearby place search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NearbySearchPort: Send + Sync {
    /// Find places matching the query
    ///
    /// Zero matches is an empty `Ok`, not an error. Entries with a missing
    /// rating or address are defaulted rather than failing the batch.
    async fn find(&self, query: &NearbyQuery) -> Result<Vec<PlaceStub>, LookupError>;
}
