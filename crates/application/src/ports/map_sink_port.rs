//! Map sink port
//!
//! The rendering surface that displays clinic markers and the camera.
//! Commands are synchronous and never suspend.

use domain::{entities::MapMarker, value_objects::Coordinate};
#[cfg(test)]
use mockall::automock;

/// Port for the map rendering surface
#[cfg_attr(test, automock)]
pub trait MapSinkPort: Send + Sync {
    /// Remove every marker from the map
    fn clear_markers(&self);

    /// Add a marker, replacing any existing marker with the same id
    fn upsert_marker(&self, marker: &MapMarker);

    /// Move the camera to a position at the given zoom level
    fn move_camera(&self, position: Coordinate, zoom: u8);
}
