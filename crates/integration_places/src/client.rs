//! Google Maps Web Services client
//!
//! Talks to the Geocoding, Nearby Search, and Place Details JSON endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::PlacesConfig;
use crate::error::PlacesError;
use crate::models::{
    ApiStatus, GeocodedLocation, NearbyPlace, NearbySearchRequest, PlaceDetails,
    RawDetailsResponse, RawGeocodeResult, RawListResponse, RawNearbyResult,
};

/// Fields requested from Place Details; anything else is billed extra
pub const DETAIL_FIELDS: &str = "name,formatted_phone_number,formatted_address";

/// Trait for places service clients
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Resolve free text to its first geocoding match
    async fn geocode(&self, address: &str) -> Result<GeocodedLocation, PlacesError>;

    /// Find places around a center; zero results is an empty list
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<Vec<NearbyPlace>, PlacesError>;

    /// Fetch phone and address for one place
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError>;
}

/// Places client backed by the Google Maps JSON endpoints
#[derive(Debug)]
pub struct GooglePlacesClient {
    client: Client,
    base_url: Url,
    api_key: SecretString,
    config: PlacesConfig,
}

impl GooglePlacesClient {
    /// Create a new Google Maps client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &PlacesConfig) -> Result<Self, PlacesError> {
        config.validate().map_err(PlacesError::ConfigurationError)?;

        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| PlacesError::ConfigurationError("api_key must be set".to_string()))?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            PlacesError::ConfigurationError(format!("invalid base_url '{}': {e}", config.base_url))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("clinic-map/0.1")
            .build()
            .map_err(|e| PlacesError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key,
            config: config.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// GET an endpoint and return the body; the key and language are appended here
    async fn fetch(&self, path: &str, mut params: Vec<(&str, String)>) -> Result<String, PlacesError> {
        let url = self.endpoint(path);

        if !self.config.language.is_empty() {
            params.push(("language", self.config.language.clone()));
        }
        params.push(("key", self.api_key.expose_secret().to_string()));

        debug!(%url, "Calling Maps endpoint");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlacesError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    // the URL carries the API key
                    PlacesError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlacesError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(PlacesError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| PlacesError::ParseError(e.without_url().to_string()))
    }

    /// Parse a geocoding response, keeping only the first result
    fn parse_geocode_response(body: &str, address: &str) -> Result<GeocodedLocation, PlacesError> {
        let raw: RawListResponse =
            serde_json::from_str(body).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        match ApiStatus::parse(raw.status.as_deref()) {
            ApiStatus::Ok => {},
            ApiStatus::ZeroResults => return Err(PlacesError::NotFound(address.to_string())),
            other => return Err(other.into_error(address, raw.error_message)),
        }

        let first = raw
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| PlacesError::NotFound(address.to_string()))?;

        let result: RawGeocodeResult =
            serde_json::from_value(first).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        let location = result
            .geometry
            .as_ref()
            .and_then(|g| g.coordinate())
            .ok_or_else(|| {
                PlacesError::ParseError("geocoding result lacks a valid geometry.location".to_string())
            })?;

        Ok(GeocodedLocation {
            location,
            formatted_address: result.formatted_address,
        })
    }

    /// Parse a nearby-search response, skipping entries without id, name, or position
    fn parse_nearby_response(body: &str) -> Result<Vec<NearbyPlace>, PlacesError> {
        let raw: RawListResponse =
            serde_json::from_str(body).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        match ApiStatus::parse(raw.status.as_deref()) {
            ApiStatus::Ok => {},
            ApiStatus::ZeroResults => return Ok(Vec::new()),
            other => return Err(other.into_error("nearby search", raw.error_message)),
        }

        let entries = raw
            .results
            .ok_or_else(|| PlacesError::ParseError("nearby response lacks results".to_string()))?;

        let places = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<RawNearbyResult>(entry) {
                Ok(result) => Self::convert_nearby(result),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable nearby result");
                    None
                },
            })
            .collect();

        Ok(places)
    }

    fn convert_nearby(raw: RawNearbyResult) -> Option<NearbyPlace> {
        let location = raw.geometry.as_ref().and_then(|g| g.coordinate());
        match (raw.place_id, raw.name, location) {
            (Some(place_id), Some(name), Some(location)) if !place_id.trim().is_empty() => {
                Some(NearbyPlace {
                    place_id,
                    name,
                    location,
                    rating: raw.rating,
                    vicinity: raw.vicinity,
                })
            },
            (place_id, name, _) => {
                warn!(?place_id, ?name, "Skipping nearby result without id, name or location");
                None
            },
        }
    }

    /// Parse a place details response
    fn parse_details_response(body: &str, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let raw: RawDetailsResponse =
            serde_json::from_str(body).map_err(|e| PlacesError::ParseError(e.to_string()))?;

        match ApiStatus::parse(raw.status.as_deref()) {
            ApiStatus::Ok => {},
            other => return Err(other.into_error(place_id, raw.error_message)),
        }

        let result = raw
            .result
            .ok_or_else(|| PlacesError::ParseError(format!("details for {place_id} lack result")))?;

        Ok(PlaceDetails {
            name: result.name,
            phone: result.formatted_phone_number,
            address: result.formatted_address,
        })
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeocodedLocation, PlacesError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(PlacesError::NotFound("Address must not be empty".to_string()));
        }

        let body = self
            .fetch("geocode/json", vec![("address", address.to_string())])
            .await?;

        let result = Self::parse_geocode_response(&body, address)?;
        debug!(location = %result.location, "Geocoded address");
        Ok(result)
    }

    #[instrument(skip(self), fields(center = %request.center))]
    async fn nearby_search(
        &self,
        request: &NearbySearchRequest,
    ) -> Result<Vec<NearbyPlace>, PlacesError> {
        let params = vec![
            ("location", request.center.to_query_pair()),
            ("radius", request.radius_meters.to_string()),
            ("keyword", request.keyword.clone()),
            ("type", request.place_type.clone()),
        ];

        let body = self.fetch("place/nearbysearch/json", params).await?;
        let places = Self::parse_nearby_response(&body)?;

        debug!(count = places.len(), "Nearby places found");
        Ok(places)
    }

    #[instrument(skip(self))]
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let params = vec![
            ("place_id", place_id.to_string()),
            ("fields", DETAIL_FIELDS.to_string()),
        ];

        let body = self.fetch("place/details/json", params).await?;
        Self::parse_details_response(&body, place_id)
    }
}
