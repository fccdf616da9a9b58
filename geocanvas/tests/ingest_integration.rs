//! Integration tests for the ingest worker.

use std::time::Duration;

use geocanvas::config::IngestConfig;
use geocanvas::document::Geometry;
use geocanvas::geo::LatLon;
use geocanvas::ingest::{DocumentFetcher, DocumentKind, FetchError, IngestEvent, IngestService};

/// Fetcher serving canned responses keyed by source suffix.
struct CannedFetcher;

impl DocumentFetcher for CannedFetcher {
    async fn fetch(&self, source: &str) -> Result<Vec<u8>, FetchError> {
        if source.ends_with(".kml") {
            Ok(br#"<kml><Placemark><name>Pier</name>
                <Point><coordinates>7.23,43.67</coordinates></Point>
                </Placemark></kml>"#
                .to_vec())
        } else if source.ends_with(".rss") {
            Ok(b"<rss><channel><item><title>Quake</title>\
                <georss:point>36.0 -120.5</georss:point></item></channel></rss>"
                .to_vec())
        } else {
            Err(FetchError::Request("404".to_string()))
        }
    }
}

/// Fetcher that never completes, for cancellation tests.
struct StalledFetcher;

impl DocumentFetcher for StalledFetcher {
    async fn fetch(&self, _source: &str) -> Result<Vec<u8>, FetchError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn kml_source_is_classified_and_parsed() {
    let (service, mut events) = IngestService::new(CannedFetcher, IngestConfig::default());
    service.submit("https://example.com/harbor.kml");

    let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("event within timeout")
        .expect("channel open");

    match event {
        IngestEvent::DocumentReady {
            source,
            kind,
            document,
        } => {
            assert_eq!(source, "https://example.com/harbor.kml");
            assert_eq!(kind, DocumentKind::Kml);
            assert_eq!(document.len(), 1);
            assert_eq!(
                document.placemarks[0].geometry,
                Geometry::Point(LatLon::new(43.67, 7.23))
            );
        }
        other => panic!("expected DocumentReady, got {:?}", other),
    }
}

#[tokio::test]
async fn feed_source_is_classified_as_georss() {
    let (service, mut events) = IngestService::new(CannedFetcher, IngestConfig::default());
    service.submit("https://example.com/quakes.rss");

    let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .unwrap()
        .unwrap();

    match event {
        IngestEvent::DocumentReady { kind, document, .. } => {
            assert_eq!(kind, DocumentKind::GeoRss);
            assert_eq!(document.len(), 1);
        }
        other => panic!("expected DocumentReady, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_failure_is_delivered_as_failed_event() {
    let (service, mut events) = IngestService::new(CannedFetcher, IngestConfig::default());
    service.submit("https://example.com/missing.json");

    let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .unwrap()
        .unwrap();

    match event {
        IngestEvent::Failed { source, error } => {
            assert_eq!(source, "https://example.com/missing.json");
            assert_eq!(error, FetchError::Request("404".to_string()));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn one_event_per_submission() {
    let (service, mut events) = IngestService::new(CannedFetcher, IngestConfig::default());
    service.submit("a.kml");
    service.submit("b.rss");
    service.submit("c.json");

    let mut ready = 0;
    let mut failed = 0;
    for _ in 0..3 {
        let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
            .await
            .unwrap()
            .unwrap();
        match event {
            IngestEvent::DocumentReady { .. } => ready += 1,
            IngestEvent::Failed { .. } => failed += 1,
        }
    }
    assert_eq!(ready, 2);
    assert_eq!(failed, 1);

    // Nothing further arrives.
    let extra = tokio::time::timeout(Duration::from_millis(100), events.recv()).await;
    assert!(extra.is_err(), "no fourth event expected");
}

#[tokio::test]
async fn shutdown_cancels_in_flight_work() {
    let (service, mut events) = IngestService::new(StalledFetcher, IngestConfig::default());
    service.submit("https://example.com/slow.kml");

    service.shutdown();
    assert!(service.is_shut_down());

    // The cancelled task delivers nothing; the channel stays empty until
    // the service (the only sender) is dropped.
    let outcome = tokio::time::timeout(Duration::from_millis(100), events.recv()).await;
    assert!(outcome.is_err(), "cancelled work must not deliver events");

    drop(service);
    let closed = tokio::time::timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("channel closes after drop");
    assert!(closed.is_none());
}
