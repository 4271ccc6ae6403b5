//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod geocoding_port;
mod location_port;
mod map_sink_port;
mod nearby_search_port;
mod place_details_port;

#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use location_port::MockLocationPort;
pub use location_port::LocationPort;
#[cfg(test)]
pub use map_sink_port::MockMapSinkPort;
pub use map_sink_port::MapSinkPort;
#[cfg(test)]
pub use nearby_search_port::MockNearbySearchPort;
pub use nearby_search_port::{
    CLINIC_CATEGORY, CLINIC_KEYWORD, NearbyQuery, NearbySearchPort, SEARCH_RADIUS_METERS,
};
#[cfg(test)]
pub use place_details_port::MockPlaceDetailsPort;
pub use place_details_port::{PlaceDetails, PlaceDetailsPort};
