//! Clinic search service
//!
//! Runs one search per submitted text: geocode, move the camera, find nearby
//! clinics, clear the map, then enrich every clinic concurrently and upsert
//! each marker as soon as its details arrive.
//!
//! A newer search invalidates everything still in flight for older ones.
//! Stale results are computed but never applied to the map.

use std::{fmt, sync::Arc, time::Duration};

use domain::{entities::MapMarker, value_objects::SearchGeneration};
use futures::{StreamExt, stream};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::{
    generation_gate::{GenerationGate, PipelineState},
    place_enricher::{DEFAULT_LOOKUP_TIMEOUT, PlaceEnricher, bounded},
};
use crate::{
    error::ApplicationError,
    ports::{
        GeocodingPort, LocationPort, MapSinkPort, NearbyQuery, NearbySearchPort, PlaceDetailsPort,
    },
};

/// Zoom level used whenever the camera is moved to a search location
pub const CAMERA_ZOOM: u8 = 15;

/// Default cap on concurrent details lookups (one provider result page)
pub const DEFAULT_MAX_CONCURRENT_ENRICHMENTS: usize = 20;

/// Tunables of the search pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Time budget of each provider lookup
    pub lookup_timeout: Duration,
    /// Maximum number of details lookups in flight per search
    pub max_concurrent_enrichments: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            max_concurrent_enrichments: DEFAULT_MAX_CONCURRENT_ENRICHMENTS,
        }
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Markers were placed for every place whose details could be fetched
    Placed {
        /// Generation of the search
        generation: SearchGeneration,
        /// Markers upserted
        placed: usize,
        /// Places dropped after a failed details lookup
        dropped: usize,
    },
    /// The nearby search found no clinics; the map was cleared
    Empty {
        /// Generation of the search
        generation: SearchGeneration,
    },
    /// A newer search took over before this one finished
    Superseded {
        /// Generation of the search
        generation: SearchGeneration,
    },
}

impl SearchOutcome {
    /// Generation the outcome belongs to
    #[must_use]
    pub const fn generation(&self) -> SearchGeneration {
        match self {
            Self::Placed { generation, .. }
            | Self::Empty { generation }
            | Self::Superseded { generation } => *generation,
        }
    }
}

/// Orchestrator of the geocode → nearby → enrich pipeline
pub struct ClinicSearchService {
    geocoder: Arc<dyn GeocodingPort>,
    nearby: Arc<dyn NearbySearchPort>,
    enricher: PlaceEnricher,
    sink: Arc<dyn MapSinkPort>,
    gate: GenerationGate,
    settings: SearchSettings,
}

impl fmt::Debug for ClinicSearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClinicSearchService")
            .field("gate", &self.gate)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ClinicSearchService {
    /// Create a new clinic search service with default settings
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        nearby: Arc<dyn NearbySearchPort>,
        details: Arc<dyn PlaceDetailsPort>,
        sink: Arc<dyn MapSinkPort>,
    ) -> Self {
        Self {
            geocoder,
            nearby,
            enricher: PlaceEnricher::new(details),
            sink,
            gate: GenerationGate::new(),
            settings: SearchSettings::default(),
        }
    }

    /// Replace the pipeline settings
    #[must_use]
    pub fn with_settings(mut self, settings: SearchSettings) -> Self {
        self.enricher = self.enricher.with_timeout(settings.lookup_timeout);
        self.settings = settings;
        self
    }

    /// Pipeline state of the current generation
    #[must_use]
    pub fn state(&self) -> PipelineState {
        self.gate.state()
    }

    /// The live search generation
    #[must_use]
    pub fn current_generation(&self) -> SearchGeneration {
        self.gate.current()
    }

    /// Center the camera on the device's last known position
    ///
    /// Does nothing when the position is unknown or a search has already
    /// been submitted. Returns whether the camera moved.
    #[instrument(skip(self, location))]
    pub async fn center_on_last_known(&self, location: &dyn LocationPort) -> bool {
        let Some(position) = location.last_known_location().await else {
            debug!("No last known location, keeping default camera");
            return false;
        };

        let moved = self
            .gate
            .run_if_current(SearchGeneration::INITIAL, PipelineState::Idle, || {
                self.sink.move_camera(position, CAMERA_ZOOM);
            });

        if moved {
            info!(%position, "Camera centered on last known location");
        } else {
            debug!("Search already running, ignoring last known location");
        }
        moved
    }

    /// Run one search for the submitted text
    ///
    /// Empty text is rejected before any lookup. Geocoding and nearby search
    /// failures are returned once; failures of a search that has been
    /// superseded are swallowed and reported as [`SearchOutcome::Superseded`].
    #[instrument(skip(self), fields(generation = tracing::field::Empty))]
    pub async fn search(&self, text: &str) -> Result<SearchOutcome, ApplicationError> {
        let query = text.trim();
        if query.is_empty() {
            debug!("Rejected empty search text");
            return Err(ApplicationError::EmptyQuery);
        }

        let generation = self.gate.begin();
        tracing::Span::current().record("generation", generation.value());
        info!(%query, "Search started");

        let resolved = bounded(self.settings.lookup_timeout, self.geocoder.resolve(query)).await;
        let center = match resolved {
            Ok(center) => center,
            Err(e) => return self.fail(generation, ApplicationError::Geocoding(e)),
        };

        let camera_moved =
            self.gate
                .run_if_current(generation, PipelineState::NearbySearching, || {
                    self.sink.move_camera(center, CAMERA_ZOOM);
                });
        if !camera_moved {
            return Ok(self.superseded(generation));
        }
        info!(%center, "Search location resolved");

        let nearby_query = NearbyQuery::clinics_around(center);
        let found = bounded(self.settings.lookup_timeout, self.nearby.find(&nearby_query)).await;
        let stubs = match found {
            Ok(stubs) => stubs,
            Err(e) => return self.fail(generation, ApplicationError::NearbySearch(e)),
        };

        let next = if stubs.is_empty() {
            PipelineState::Empty
        } else {
            PipelineState::Enriching
        };
        if !self
            .gate
            .run_if_current(generation, next, || self.sink.clear_markers())
        {
            return Ok(self.superseded(generation));
        }

        if stubs.is_empty() {
            info!("No clinics found nearby");
            return Ok(SearchOutcome::Empty { generation });
        }

        info!(count = stubs.len(), "Enriching nearby clinics");

        let mut placed = 0usize;
        let mut dropped = 0usize;
        let mut stale = 0usize;

        let mut enrichments = stream::iter(stubs)
            .map(|stub| self.enricher.enrich(stub))
            .buffer_unordered(self.settings.max_concurrent_enrichments.max(1));

        while let Some(enriched) = enrichments.next().await {
            let Some(place) = enriched else {
                dropped += 1;
                continue;
            };

            let marker = MapMarker::from(place);
            if self
                .gate
                .run_if_current(generation, PipelineState::Enriching, || {
                    self.sink.upsert_marker(&marker);
                })
            {
                debug!(place_id = %marker.id, "Marker placed");
                placed += 1;
            } else {
                stale += 1;
            }
        }

        if stale > 0 || !self.gate.transition(generation, PipelineState::Idle) {
            debug!(stale, "Discarded enrichments of a superseded search");
            return Ok(self.superseded(generation));
        }

        info!(placed, dropped, "Search complete");
        Ok(SearchOutcome::Placed {
            generation,
            placed,
            dropped,
        })
    }

    /// Record a stage failure for `generation`, or swallow it if stale
    fn fail(
        &self,
        generation: SearchGeneration,
        error: ApplicationError,
    ) -> Result<SearchOutcome, ApplicationError> {
        if self.gate.transition(generation, PipelineState::Failed) {
            warn!(%error, "Search failed");
            Err(error)
        } else {
            debug!(%error, "Ignoring failure of a superseded search");
            Ok(self.superseded(generation))
        }
    }

    #[allow(clippy::unused_self)]
    fn superseded(&self, generation: SearchGeneration) -> SearchOutcome {
        debug!(%generation, "Search superseded by a newer one");
        SearchOutcome::Superseded { generation }
    }
}
