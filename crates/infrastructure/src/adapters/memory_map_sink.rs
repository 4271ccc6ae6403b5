//! In-memory map sink
//!
//! Holds the markers and camera position a map view would display. Used by
//! the CLI to summarize a search and by tests to observe the pipeline.

use std::collections::HashMap;

use application::ports::MapSinkPort;
use domain::{entities::MapMarker, value_objects::Coordinate};
use parking_lot::RwLock;
use serde::Serialize;

/// Camera position and zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera {
    /// Center of the view
    pub position: Coordinate,
    /// Zoom level
    pub zoom: u8,
}

/// Point-in-time copy of the map contents
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapSnapshot {
    /// Markers ordered by id
    pub markers: Vec<MapMarker>,
    /// Current camera, if it was ever moved
    pub camera: Option<Camera>,
    /// How often the markers were cleared
    pub clear_count: usize,
}

#[derive(Debug, Default)]
struct MapState {
    markers: HashMap<String, MapMarker>,
    camera: Option<Camera>,
    clear_count: usize,
}

/// Map surface that keeps everything in memory
#[derive(Debug, Default)]
pub struct InMemoryMapSink {
    state: RwLock<MapState>,
}

impl InMemoryMapSink {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the current contents
    #[must_use]
    pub fn snapshot(&self) -> MapSnapshot {
        let state = self.state.read();
        let mut markers: Vec<MapMarker> = state.markers.values().cloned().collect();
        markers.sort_by(|a, b| a.id.cmp(&b.id));
        MapSnapshot {
            markers,
            camera: state.camera,
            clear_count: state.clear_count,
        }
    }

    /// Number of markers on the map
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.state.read().markers.len()
    }

    /// Marker with the given id
    #[must_use]
    pub fn marker(&self, id: &str) -> Option<MapMarker> {
        self.state.read().markers.get(id).cloned()
    }
}

impl MapSinkPort for InMemoryMapSink {
    fn clear_markers(&self) {
        let mut state = self.state.write();
        state.markers.clear();
        state.clear_count += 1;
    }

    fn upsert_marker(&self, marker: &MapMarker) {
        self.state
            .write()
            .markers
            .insert(marker.id.clone(), marker.clone());
    }

    fn move_camera(&self, position: Coordinate, zoom: u8) {
        self.state.write().camera = Some(Camera { position, zoom });
    }
}

#[cfg(test)]
mod tests {
    use domain::entities::{EnrichedPlace, PlaceStub};

    use super::*;

    fn marker(id: &str, phone: &str) -> MapMarker {
        let stub = PlaceStub::new(id, format!("Clinic {id}"), Coordinate::seoul_station()).unwrap();
        MapMarker::from(EnrichedPlace::merge(stub, Some(phone.to_string()), None))
    }

    #[test]
    fn test_upsert_replaces_same_id() {
        let sink = InMemoryMapSink::new();
        sink.upsert_marker(&marker("A", "111"));
        sink.upsert_marker(&marker("A", "222"));
        sink.upsert_marker(&marker("B", "333"));

        assert_eq!(sink.marker_count(), 2);
        assert_eq!(sink.marker("A").unwrap().phone, "222");
    }

    #[test]
    fn test_clear_counts_and_empties() {
        let sink = InMemoryMapSink::new();
        sink.upsert_marker(&marker("A", "111"));
        sink.clear_markers();

        let snapshot = sink.snapshot();
        assert!(snapshot.markers.is_empty());
        assert_eq!(snapshot.clear_count, 1);
    }

    #[test]
    fn test_camera_and_snapshot_order() {
        let sink = InMemoryMapSink::new();
        assert!(sink.snapshot().camera.is_none());

        sink.move_camera(Coordinate::seoul_station(), 15);
        sink.upsert_marker(&marker("B", "2"));
        sink.upsert_marker(&marker("A", "1"));

        let snapshot = sink.snapshot();
        assert_eq!(
            snapshot.camera,
            Some(Camera {
                position: Coordinate::seoul_station(),
                zoom: 15
            })
        );
        let ids: Vec<&str> = snapshot.markers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["A", "B"]);
    }
}
