//! Place stub entity
//!
//! The minimal record returned by a nearby search, before any details lookup.

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::Coordinate};

/// Placeholder shown when the provider gives no address at all
pub const UNKNOWN_ADDRESS: &str = "Address unavailable";

/// A candidate place from the nearby search stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceStub {
    /// Provider place id (unique per provider)
    pub id: String,
    /// Display name
    pub name: String,
    /// Position of the place
    pub location: Coordinate,
    /// Average rating, 0.0 means unrated
    pub rating: f64,
    /// Short address used when the details lookup has none
    pub fallback_address: String,
}

impl PlaceStub {
    /// Create a new unrated stub with the placeholder address
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if the id is blank.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coordinate,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "place id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: name.into(),
            location,
            rating: 0.0,
            fallback_address: UNKNOWN_ADDRESS.to_string(),
        })
    }

    /// Set the rating; missing or non-finite ratings count as unrated
    #[must_use]
    pub fn with_rating(mut self, rating: Option<f64>) -> Self {
        self.rating = rating.filter(|r| r.is_finite() && *r >= 0.0).unwrap_or(0.0);
        self
    }

    /// Set the fallback address; blank values keep the placeholder
    #[must_use]
    pub fn with_fallback_address(mut self, address: Option<String>) -> Self {
        if let Some(address) = address.filter(|a| !a.trim().is_empty()) {
            self.fallback_address = address;
        }
        self
    }

    /// Whether the place carries a rating
    #[must_use]
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }
}
