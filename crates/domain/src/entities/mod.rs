//! Domain entities - Place records produced by the search pipeline

mod enriched_place;
mod map_marker;
mod place_stub;

pub use enriched_place::{EnrichedPlace, UNKNOWN_PHONE};
pub use map_marker::{MapMarker, MarkerPopup};
pub use place_stub::{PlaceStub, UNKNOWN_ADDRESS};
