//! Google Maps response models

use domain::value_objects::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::PlacesError;

/// First geocoding match for a free-text address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedLocation {
    /// Resolved coordinate
    pub location: Coordinate,
    /// Address as formatted by Google
    pub formatted_address: Option<String>,
}

/// Parameters of a nearby search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbySearchRequest {
    /// Search center
    pub center: Coordinate,
    /// Radius in meters
    pub radius_meters: u32,
    /// Keyword matched against place names and content
    pub keyword: String,
    /// Google place type (e.g. `hospital`)
    pub place_type: String,
}

/// One nearby-search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyPlace {
    /// Google place ID
    pub place_id: String,
    /// Display name
    pub name: String,
    /// Place position
    pub location: Coordinate,
    /// Average user rating, if any
    pub rating: Option<f64>,
    /// Short address
    pub vicinity: Option<String>,
}

/// Place details restricted to the requested fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDetails {
    /// Display name
    pub name: Option<String>,
    /// Local phone number
    pub phone: Option<String>,
    /// Full formatted address
    pub address: Option<String>,
}

/// Value of the `status` field every Maps response carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ApiStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    RequestDenied,
    InvalidRequest,
    NotFound,
    Other(String),
}

impl ApiStatus {
    pub(crate) fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("OK") => Self::Ok,
            Some("ZERO_RESULTS") => Self::ZeroResults,
            Some("OVER_QUERY_LIMIT") => Self::OverQueryLimit,
            Some("REQUEST_DENIED") => Self::RequestDenied,
            Some("INVALID_REQUEST") => Self::InvalidRequest,
            Some("NOT_FOUND") => Self::NotFound,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    /// Error for a status that is neither `OK` nor `ZERO_RESULTS`
    pub(crate) fn into_error(self, subject: &str, message: Option<String>) -> PlacesError {
        let detail = message.unwrap_or_default();
        match self {
            Self::OverQueryLimit => PlacesError::RateLimitExceeded {
                retry_after_secs: None,
            },
            Self::RequestDenied => PlacesError::RequestDenied(detail),
            Self::NotFound | Self::ZeroResults => PlacesError::NotFound(subject.to_string()),
            Self::InvalidRequest => {
                PlacesError::RequestFailed(format!("INVALID_REQUEST for {subject}: {detail}"))
            },
            Self::Other(status) => PlacesError::RequestFailed(format!("{status}: {detail}")),
            Self::Ok => PlacesError::ParseError(format!("unexpected OK status for {subject}")),
        }
    }
}

// Raw wire types. Results are kept as JSON values so one odd entry cannot
// fail the whole response.

#[derive(Debug, Deserialize)]
pub(crate) struct RawListResponse {
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub results: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDetailsResponse {
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub result: Option<RawDetailsResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDetailsResult {
    pub name: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeocodeResult {
    pub formatted_address: Option<String>,
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawNearbyResult {
    pub place_id: Option<String>,
    pub name: Option<String>,
    pub geometry: Option<RawGeometry>,
    pub rating: Option<f64>,
    pub vicinity: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    pub location: Option<RawLatLng>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLatLng {
    pub lat: f64,
    pub lng: f64,
}

impl RawGeometry {
    pub(crate) fn coordinate(&self) -> Option<Coordinate> {
        let loc = self.location.as_ref()?;
        Coordinate::new(loc.lat, loc.lng).ok()
    }
}
