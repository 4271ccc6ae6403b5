//! Application services - Use case implementations

mod clinic_search_service;
mod generation_gate;
mod place_enricher;

pub use clinic_search_service::{
    CAMERA_ZOOM, ClinicSearchService, DEFAULT_MAX_CONCURRENT_ENRICHMENTS, SearchOutcome,
    SearchSettings,
};
pub use generation_gate::{GenerationGate, PipelineState};
pub use place_enricher::{DEFAULT_LOOKUP_TIMEOUT, PlaceEnricher};
