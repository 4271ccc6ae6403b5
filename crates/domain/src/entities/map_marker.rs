//! Map marker payload
//!
//! The structured record handed to the map sink. Renderers read the fields
//! directly; nothing downstream re-parses a formatted snippet.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::EnrichedPlace;
use crate::value_objects::Coordinate;

/// A marker to upsert on the map, keyed by place id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    /// Provider place id, used as the marker key
    pub id: String,
    /// Marker position
    pub position: Coordinate,
    /// Marker title (place name)
    pub title: String,
    /// Rating, 0.0 means unrated
    pub rating: f64,
    /// Phone number or placeholder
    pub phone: String,
    /// Address or placeholder
    pub address: String,
}

impl MapMarker {
    /// Build the popup shown when the marker is tapped
    #[must_use]
    pub fn popup(&self) -> MarkerPopup {
        let rating_line = if self.rating > 0.0 {
            format!("Rating: {:.1}", self.rating)
        } else {
            "Rating: unrated".to_string()
        };

        MarkerPopup {
            title: self.title.clone(),
            rating_line,
            phone_line: format!("Phone: {}", self.phone),
            address_line: format!("Address: {}", self.address),
        }
    }
}

impl From<&EnrichedPlace> for MapMarker {
    fn from(place: &EnrichedPlace) -> Self {
        Self {
            id: place.stub.id.clone(),
            position: place.stub.location,
            title: place.stub.name.clone(),
            rating: place.stub.rating,
            phone: place.phone.clone(),
            address: place.address.clone(),
        }
    }
}

impl From<EnrichedPlace> for MapMarker {
    fn from(place: EnrichedPlace) -> Self {
        Self {
            id: place.stub.id,
            position: place.stub.location,
            title: place.stub.name,
            rating: place.stub.rating,
            phone: place.phone,
            address: place.address,
        }
    }
}

/// Display lines of a marker popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPopup {
    /// Place name
    pub title: String,
    /// Rating line
    pub rating_line: String,
    /// Phone line
    pub phone_line: String,
    /// Address line
    pub address_line: String,
}

impl fmt::Display for MarkerPopup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n  {}\n  {}\n  {}",
            self.title, self.rating_line, self.phone_line, self.address_line
        )
    }
}
