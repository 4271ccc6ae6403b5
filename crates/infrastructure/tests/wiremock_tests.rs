//! End-to-end search pipeline against a mocked Google Maps API

use std::{sync::Arc, time::Duration};

use application::{
    ApplicationError, ClinicSearchService, LookupError, PipelineState, SearchOutcome,
    SearchSettings,
};
use infrastructure::{InMemoryMapSink, PlacesAdapter};
use integration_places::PlacesConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer, sink: Arc<InMemoryMapSink>) -> ClinicSearchService {
    let adapter = Arc::new(PlacesAdapter::from_config(&PlacesConfig::for_testing(server.uri())).unwrap());
    ClinicSearchService::new(adapter.clone(), adapter.clone(), adapter, sink)
}

async fn mount_seoul_station(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "Seoul Station"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "status": "OK",
                "results": [{ "geometry": { "location": { "lat": 37.5547, "lng": 126.9707 } } }]
            }"#,
        ))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("location", "37.5547,126.9707"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "status": "OK",
                "results": [
                    { "place_id": "A", "name": "Clinic A", "rating": 4.5, "vicinity": "1 Hangang-daero",
                      "geometry": { "location": { "lat": 37.556, "lng": 126.972 } } },
                    { "place_id": "B", "name": "Clinic B",
                      "geometry": { "location": { "lat": 37.553, "lng": 126.968 } } }
                ]
            }"#,
        ))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_seoul_station_places_enriched_markers() {
    let server = MockServer::start().await;
    mount_seoul_station(&server).await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{ "status": "OK", "result": { "name": "Clinic A", "formatted_phone_number": "555-1234", "formatted_address": "12 Main St" } }"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", "B"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{ "status": "OK", "result": { "name": "Clinic B" } }"#,
        ))
        .mount(&server)
        .await;

    let sink = Arc::new(InMemoryMapSink::new());
    let service = service_for(&server, sink.clone());

    let outcome = service.search("Seoul Station").await.unwrap();
    assert!(matches!(
        outcome,
        SearchOutcome::Placed {
            placed: 2,
            dropped: 0,
            ..
        }
    ));
    assert_eq!(service.state(), PipelineState::Idle);

    let snapshot = sink.snapshot();
    assert_eq!(snapshot.clear_count, 1);
    let camera = snapshot.camera.unwrap();
    assert_eq!(camera.zoom, 15);
    assert!((camera.position.latitude() - 37.5547).abs() < 1e-9);

    let a = sink.marker("A").unwrap();
    assert_eq!(a.phone, "555-1234");
    assert_eq!(a.address, "12 Main St");
    assert_eq!(a.popup().rating_line, "Rating: 4.5");

    let b = sink.marker("B").unwrap();
    assert_eq!(b.phone, "unknown");
    assert!(!b.address.is_empty());
}

#[tokio::test]
async fn test_failed_details_drop_only_that_place() {
    let server = MockServer::start().await;
    mount_seoul_station(&server).await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", "A"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", "B"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{ "status": "OK", "result": { "formatted_phone_number": "02-000-0000" } }"#,
        ))
        .mount(&server)
        .await;

    let sink = Arc::new(InMemoryMapSink::new());
    let service = service_for(&server, sink.clone());

    let outcome = service.search("Seoul Station").await.unwrap();
    assert!(matches!(
        outcome,
        SearchOutcome::Placed {
            placed: 1,
            dropped: 1,
            ..
        }
    ));
    assert!(sink.marker("A").is_none());
    assert_eq!(sink.marker("B").unwrap().phone, "02-000-0000");
}

#[tokio::test]
async fn test_unknown_place_fails_without_touching_map() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{ "status": "ZERO_RESULTS", "results": [] }"#),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sink = Arc::new(InMemoryMapSink::new());
    let service = service_for(&server, sink.clone());

    let err = service.search("asdkjashd").await.unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Geocoding(LookupError::NotFound(_))
    ));
    assert_eq!(service.state(), PipelineState::Failed);

    let snapshot = sink.snapshot();
    assert!(snapshot.camera.is_none());
    assert_eq!(snapshot.clear_count, 0);
}

#[tokio::test]
async fn test_no_clinics_clears_map_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{ "status": "OK", "results": [{ "geometry": { "location": { "lat": 35.1796, "lng": 129.0756 } } }] }"#,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{ "status": "ZERO_RESULTS", "results": [] }"#),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sink = Arc::new(InMemoryMapSink::new());
    let service = service_for(&server, sink.clone());

    let outcome = service.search("Busan").await.unwrap();
    assert!(matches!(outcome, SearchOutcome::Empty { .. }));
    assert_eq!(service.state(), PipelineState::Empty);

    let snapshot = sink.snapshot();
    assert_eq!(snapshot.clear_count, 1);
    assert!(snapshot.markers.is_empty());
    assert!(snapshot.camera.is_some());
}

#[tokio::test]
async fn test_slow_geocoder_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(3))
                .set_body_string(r#"{ "status": "ZERO_RESULTS", "results": [] }"#),
        )
        .mount(&server)
        .await;

    let sink = Arc::new(InMemoryMapSink::new());
    let service = service_for(&server, sink.clone()).with_settings(SearchSettings {
        lookup_timeout: Duration::from_millis(200),
        ..SearchSettings::default()
    });

    let err = service.search("Seoul Station").await.unwrap_err();
    assert_eq!(
        err,
        ApplicationError::Geocoding(LookupError::Timeout { timeout_ms: 200 })
    );
    assert!(err.to_string().contains("200 ms"));
    assert!(sink.snapshot().camera.is_none());
}
