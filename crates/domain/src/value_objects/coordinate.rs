//! Geographic coordinate value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A point on the map in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]. NaN is rejected as well.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate without validation (for trusted constants)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Format as the `lat,lng` pair used in provider query strings
    #[must_use]
    pub fn to_query_pair(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Well-known places used as defaults and in tests
impl Coordinate {
    /// Seoul Station, South Korea
    #[must_use]
    pub const fn seoul_station() -> Self {
        Self::new_unchecked(37.5547, 126.9707)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let coord = Coordinate::new(37.5547, 126.9707).expect("valid coordinates");
        assert!((coord.latitude() - 37.5547).abs() < f64::EPSILON);
        assert!((coord.longitude() - 126.9707).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(Coordinate::new(91.0, 0.0).is_err());
        assert!(Coordinate::new(0.0, -181.0).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_display() {
        let display = Coordinate::seoul_station().to_string();
        assert_eq!(display, "37.554700, 126.970700");
    }

    #[test]
    fn test_query_pair() {
        assert_eq!(
            Coordinate::seoul_station().to_query_pair(),
            "37.5547,126.9707"
        );
    }

    #[test]
    fn test_serialization() {
        let coord = Coordinate::seoul_station();
        let json = serde_json::to_string(&coord).expect("serialize");
        assert!(json.contains("\"latitude\":37.5547"));

        let deserialized: Coordinate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(coord, deserialized);
    }
}
