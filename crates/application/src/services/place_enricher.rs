//! Place enricher
//!
//! Merges each nearby-search stub with its details lookup. Lookups are
//! independent: one failing place is logged and dropped, nothing else.

use std::{fmt, future::Future, sync::Arc, time::Duration};

use domain::entities::{EnrichedPlace, PlaceStub};
use tracing::{debug, instrument, warn};

use crate::{error::LookupError, ports::PlaceDetailsPort};

/// Default time budget of a single provider lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Await a lookup, turning an elapsed budget into `LookupError::Timeout`
pub(crate) async fn bounded<T>(
    limit: Duration,
    lookup: impl Future<Output = Result<T, LookupError>>,
) -> Result<T, LookupError> {
    tokio::time::timeout(limit, lookup)
        .await
        .unwrap_or(Err(LookupError::Timeout {
            timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
        }))
}

/// Service turning place stubs into enriched places
pub struct PlaceEnricher {
    details_port: Arc<dyn PlaceDetailsPort>,
    timeout: Duration,
}

impl fmt::Debug for PlaceEnricher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceEnricher")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl PlaceEnricher {
    /// Create a new enricher
    pub fn new(details_port: Arc<dyn PlaceDetailsPort>) -> Self {
        Self {
            details_port,
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Override the per-lookup timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enrich a stub; `None` means the place is silently omitted
    #[instrument(skip(self, stub), fields(place_id = %stub.id))]
    pub async fn enrich(&self, stub: PlaceStub) -> Option<EnrichedPlace> {
        match bounded(self.timeout, self.details_port.lookup(&stub.id)).await {
            Ok(details) => {
                debug!(
                    has_phone = details.phone.is_some(),
                    has_address = details.address.is_some(),
                    "Place details fetched"
                );
                Some(EnrichedPlace::merge(stub, details.phone, details.address))
            },
            Err(e) => {
                warn!(name = %stub.name, error = %e, "Dropping place after failed details lookup");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{entities::UNKNOWN_PHONE, value_objects::Coordinate};

    use super::*;
    use crate::ports::{MockPlaceDetailsPort, PlaceDetails};

    fn stub() -> PlaceStub {
        PlaceStub::new("place-1", "Seoul Mind Clinic", Coordinate::seoul_station())
            .unwrap()
            .with_rating(Some(4.5))
            .with_fallback_address(Some("12 Main St".to_string()))
    }

    #[tokio::test]
    async fn merges_details_with_stub_fallback() {
        let mut port = MockPlaceDetailsPort::new();
        port.expect_lookup()
            .withf(|id| id == "place-1")
            .times(1)
            .returning(|_| {
                Ok(PlaceDetails {
                    phone: Some("555-1234".to_string()),
                    address: None,
                })
            });

        let enricher = PlaceEnricher::new(Arc::new(port));
        let place = enricher.enrich(stub()).await.unwrap();

        assert_eq!(place.address, "12 Main St");
        assert_eq!(place.phone, "555-1234");
        assert!((place.stub.rating - 4.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn missing_phone_becomes_unknown() {
        let mut port = MockPlaceDetailsPort::new();
        port.expect_lookup().returning(|_| {
            Ok(PlaceDetails {
                phone: None,
                address: Some("405 Hangang-daero".to_string()),
            })
        });

        let place = PlaceEnricher::new(Arc::new(port))
            .enrich(stub())
            .await
            .unwrap();

        assert_eq!(place.phone, UNKNOWN_PHONE);
        assert_eq!(place.address, "405 Hangang-daero");
    }

    #[tokio::test]
    async fn failed_lookup_drops_place() {
        let mut port = MockPlaceDetailsPort::new();
        port.expect_lookup()
            .returning(|_| Err(LookupError::Transport("HTTP 500".to_string())));

        let result = PlaceEnricher::new(Arc::new(port)).enrich(stub()).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn bounded_maps_elapsed_budget_to_timeout() {
        let result: Result<(), LookupError> = bounded(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        assert_eq!(result, Err(LookupError::Timeout { timeout_ms: 10 }));
    }

    #[tokio::test]
    async fn sub_second_budget_is_reported_in_milliseconds() {
        let result: Result<(), LookupError> = bounded(Duration::from_millis(500), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        let err = tokio_test::assert_err!(result);
        assert_eq!(err, LookupError::Timeout { timeout_ms: 500 });
        assert!(err.to_string().contains("500 ms"));
    }

    #[tokio::test]
    async fn bounded_passes_through_results() {
        let value = tokio_test::assert_ok!(
            bounded(Duration::from_secs(1), async { Ok::<_, LookupError>(7) }).await
        );
        assert_eq!(value, 7);
    }
}
