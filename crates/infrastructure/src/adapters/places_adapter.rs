//! Places adapter - Implements the lookup ports using integration_places

use std::sync::Arc;

use application::{
    error::LookupError,
    ports::{GeocodingPort, NearbyQuery, NearbySearchPort, PlaceDetails, PlaceDetailsPort},
};
use async_trait::async_trait;
use domain::{entities::PlaceStub, value_objects::Coordinate};
use integration_places::{
    GooglePlacesClient, NearbyPlace, NearbySearchRequest, PlacesClient, PlacesConfig, PlacesError,
};
use tracing::{debug, instrument, warn};

/// Adapter for geocoding, nearby search, and place details over one places client
#[derive(Clone)]
pub struct PlacesAdapter {
    client: Arc<dyn PlacesClient>,
}

impl std::fmt::Debug for PlacesAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesAdapter")
            .field("client", &"dyn PlacesClient")
            .finish()
    }
}

impl PlacesAdapter {
    /// Create an adapter over an existing client
    pub fn new(client: Arc<dyn PlacesClient>) -> Self {
        Self { client }
    }

    /// Create an adapter backed by the Google Maps endpoints
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn from_config(config: &PlacesConfig) -> Result<Self, PlacesError> {
        Ok(Self::new(Arc::new(GooglePlacesClient::new(config)?)))
    }

    /// Map a client error onto the lookup taxonomy
    fn map_error(error: PlacesError) -> LookupError {
        match error {
            PlacesError::NotFound(subject) => LookupError::NotFound(subject),
            PlacesError::ParseError(detail) => LookupError::MalformedResponse(detail),
            PlacesError::Timeout { timeout_secs } => LookupError::Timeout {
                timeout_ms: timeout_secs.saturating_mul(1000),
            },
            other => LookupError::Transport(other.to_string()),
        }
    }

    fn convert_place(place: NearbyPlace) -> Option<PlaceStub> {
        match PlaceStub::new(place.place_id, place.name, place.location) {
            Ok(stub) => Some(
                stub.with_rating(place.rating)
                    .with_fallback_address(place.vicinity),
            ),
            Err(e) => {
                warn!(error = %e, "Skipping nearby place");
                None
            },
        }
    }
}

#[async_trait]
impl GeocodingPort for PlacesAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, query: &str) -> Result<Coordinate, LookupError> {
        let result = self
            .client
            .geocode(query)
            .await
            .map_err(Self::map_error)?;

        debug!(
            location = %result.location,
            formatted_address = ?result.formatted_address,
            "Resolved search text"
        );
        Ok(result.location)
    }
}

#[async_trait]
impl NearbySearchPort for PlacesAdapter {
    #[instrument(skip(self), fields(center = %query.center))]
    async fn find(&self, query: &NearbyQuery) -> Result<Vec<PlaceStub>, LookupError> {
        let request = NearbySearchRequest {
            center: query.center,
            radius_meters: query.radius_meters,
            keyword: query.keyword.clone(),
            place_type: query.category.clone(),
        };

        let places = self
            .client
            .nearby_search(&request)
            .await
            .map_err(Self::map_error)?;

        Ok(places.into_iter().filter_map(Self::convert_place).collect())
    }
}

#[async_trait]
impl PlaceDetailsPort for PlacesAdapter {
    #[instrument(skip(self))]
    async fn lookup(&self, place_id: &str) -> Result<PlaceDetails, LookupError> {
        let details = self
            .client
            .place_details(place_id)
            .await
            .map_err(Self::map_error)?;

        Ok(PlaceDetails {
            phone: details.phone,
            address: details.address,
        })
    }
}
