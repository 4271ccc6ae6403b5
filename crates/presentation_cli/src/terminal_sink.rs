//! Map sink that renders to the terminal
//!
//! Keeps the map contents in memory and prints every command as it happens.

use application::ports::MapSinkPort;
use domain::{entities::MapMarker, value_objects::Coordinate};
use infrastructure::{InMemoryMapSink, MapSnapshot};
use tracing::warn;

/// How markers are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Popup text blocks
    Text,
    /// One JSON object per marker
    JsonLines,
}

/// Terminal rendering of the map
#[derive(Debug)]
pub struct TerminalMapSink {
    map: InMemoryMapSink,
    mode: OutputMode,
}

impl TerminalMapSink {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            map: InMemoryMapSink::new(),
            mode,
        }
    }

    pub fn snapshot(&self) -> MapSnapshot {
        self.map.snapshot()
    }
}

/// Text printed for a placed marker, `None` if it cannot be rendered
pub fn render_marker(marker: &MapMarker, mode: OutputMode) -> Option<String> {
    match mode {
        OutputMode::Text => Some(format!("📍 {}", marker.popup())),
        OutputMode::JsonLines => match serde_json::to_string(marker) {
            Ok(line) => Some(line),
            Err(e) => {
                warn!(error = %e, place_id = %marker.id, "Failed to serialize marker");
                None
            },
        },
    }
}

impl MapSinkPort for TerminalMapSink {
    fn clear_markers(&self) {
        self.map.clear_markers();
        if self.mode == OutputMode::Text {
            println!("🧹 Map cleared");
        }
    }

    fn upsert_marker(&self, marker: &MapMarker) {
        self.map.upsert_marker(marker);
        if let Some(line) = render_marker(marker, self.mode) {
            println!("{line}");
        }
    }

    fn move_camera(&self, position: Coordinate, zoom: u8) {
        self.map.move_camera(position, zoom);
        if self.mode == OutputMode::Text {
            println!("🗺️  Camera at {position} (zoom {zoom})");
        }
    }
}
