//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod memory_map_sink;
mod places_adapter;
mod static_location_adapter;

pub use memory_map_sink::{Camera, InMemoryMapSink, MapSnapshot};
pub use places_adapter::PlacesAdapter;
pub use static_location_adapter::StaticLocationProvider;
