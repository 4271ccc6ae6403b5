//! Google Maps Web Services integration
//!
//! Provides address geocoding, nearby place search, and place details via the
//! [Google Maps Platform](https://developers.google.com/maps/documentation/places/web-service)
//! JSON endpoints.
//!
//! # Architecture
//!
//! [`PlacesClient`] defines the interface for the three lookups the clinic
//! search needs, implemented by [`GooglePlacesClient`]. Google reports most
//! failures in the response body (`status` field) rather than the HTTP status;
//! both are mapped onto [`PlacesError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_places::{GooglePlacesClient, PlacesClient, PlacesConfig};
//!
//! let client = GooglePlacesClient::new(&config)?;
//! let station = client.geocode("Seoul Station").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{DETAIL_FIELDS, GooglePlacesClient, PlacesClient};
pub use config::PlacesConfig;
pub use error::PlacesError;
pub use models::{GeocodedLocation, NearbyPlace, NearbySearchRequest, PlaceDetails};
