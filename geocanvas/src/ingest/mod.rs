//! Off-thread document ingestion.
//!
//! Parsing and fetching never run on the UI thread: the ingest worker
//! fetches raw bytes through the host's [`DocumentFetcher`], classifies
//! them as KML or GeoRSS, parses, and delivers an [`IngestEvent`] over a
//! channel the UI thread drains. The overlay manager is only ever invoked
//! once parsed data is ready.
//!
//! # Example
//!
//! ```ignore
//! use geocanvas::config::IngestConfig;
//! use geocanvas::ingest::{IngestEvent, IngestService};
//!
//! let (service, mut events) = IngestService::new(fetcher, IngestConfig::default());
//! service.submit("https://example.com/trails.kml");
//!
//! // On the UI thread:
//! while let Some(event) = events.recv().await {
//!     if let IngestEvent::DocumentReady { source, document, .. } = event {
//!         manager.add_kml_overlay(&source, &document);
//!     }
//! }
//! ```

mod service;

pub use service::{DocumentFetcher, DocumentKind, FetchError, IngestEvent, IngestService};
