//! Search generation gate
//!
//! Tracks the current search generation and its pipeline state. Every map
//! command issued on behalf of a search goes through [`GenerationGate::run_if_current`],
//! so results of a superseded search never reach the sink.

use domain::value_objects::SearchGeneration;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Pipeline state of the current search generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    /// No search running
    #[default]
    Idle,
    /// Resolving the search text
    Geocoding,
    /// Looking up clinics around the resolved coordinate
    NearbySearching,
    /// Details lookups in flight
    Enriching,
    /// Nearby search found nothing
    Empty,
    /// Geocoding or nearby search failed
    Failed,
}

#[derive(Debug, Default)]
struct GateState {
    generation: SearchGeneration,
    phase: PipelineState,
}

/// Owner of the live generation counter
///
/// The lock is held only for the compare plus one synchronous sink command,
/// never across an await.
#[derive(Debug, Default)]
pub struct GenerationGate {
    state: Mutex<GateState>,
}

impl GenerationGate {
    /// Create a gate at the initial generation
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new search; every earlier generation becomes stale
    pub fn begin(&self) -> SearchGeneration {
        let mut state = self.state.lock();
        state.generation = state.generation.next();
        state.phase = PipelineState::Geocoding;
        state.generation
    }

    /// The live generation
    #[must_use]
    pub fn current(&self) -> SearchGeneration {
        self.state.lock().generation
    }

    /// Pipeline state of the live generation
    #[must_use]
    pub fn state(&self) -> PipelineState {
        self.state.lock().phase
    }

    /// Run `action` and enter `next` only if `generation` is still current
    ///
    /// Returns `false` without running `action` when the generation is stale.
    pub fn run_if_current(
        &self,
        generation: SearchGeneration,
        next: PipelineState,
        action: impl FnOnce(),
    ) -> bool {
        let mut state = self.state.lock();
        if state.generation != generation {
            return false;
        }
        action();
        state.phase = next;
        true
    }

    /// Enter `next` if `generation` is still current
    pub fn transition(&self, generation: SearchGeneration, next: PipelineState) -> bool {
        self.run_if_current(generation, next, || {})
    }
}
