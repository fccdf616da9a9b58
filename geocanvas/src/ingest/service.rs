//! Ingest worker implementation.

use std::future::Future;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::IngestConfig;
use crate::document::{georss, kml, Document};

/// Errors surfaced by the host's fetch layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The transport failed (connection, status, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// Local read failed (file URLs, pasteboard content).
    #[error("read failed: {0}")]
    Read(String),
}

/// Byte source for documents; the host's HTTP or file layer implements
/// this.
pub trait DocumentFetcher: Send + Sync + 'static {
    /// Fetches the raw bytes behind `source` (a URL or file path).
    fn fetch(&self, source: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Classification of fetched bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Kml,
    GeoRss,
}

/// Completion delivered back to the UI thread.
#[derive(Debug)]
pub enum IngestEvent {
    /// The document parsed; an empty document is a valid outcome.
    DocumentReady {
        source: String,
        kind: DocumentKind,
        document: Document,
    },
    /// The fetch failed; parsing never produces this.
    Failed { source: String, error: FetchError },
}

/// Spawns fetch-and-parse work and delivers completions over a channel.
///
/// Dropping the service (or calling [`shutdown`](Self::shutdown)) cancels
/// in-flight work; shutdown is idempotent.
pub struct IngestService<F> {
    fetcher: Arc<F>,
    events_tx: mpsc::Sender<IngestEvent>,
    shutdown: CancellationToken,
}

impl<F: DocumentFetcher> IngestService<F> {
    /// Creates the service and the event receiver the UI thread drains.
    pub fn new(fetcher: F, config: IngestConfig) -> (Self, mpsc::Receiver<IngestEvent>) {
        let (events_tx, events_rx) = mpsc::channel(config.channel_capacity);
        (
            Self {
                fetcher: Arc::new(fetcher),
                events_tx,
                shutdown: CancellationToken::new(),
            },
            events_rx,
        )
    }

    /// Starts fetching and parsing `source` on a worker task.
    ///
    /// Exactly one event per submission is delivered unless the service
    /// shuts down first. Must be called within a tokio runtime.
    pub fn submit(&self, source: &str) {
        let source = source.to_string();
        let fetcher = Arc::clone(&self.fetcher);
        let events_tx = self.events_tx.clone();
        let shutdown = self.shutdown.clone();

        tokio::spawn(async move {
            let bytes = tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    debug!(%source, "ingest cancelled before fetch completed");
                    return;
                }

                result = fetcher.fetch(&source) => result,
            };

            let event = match bytes {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes);
                    let kind = classify(&text);
                    let document = match kind {
                        DocumentKind::Kml => kml::parse(&text),
                        DocumentKind::GeoRss => georss::parse(&text),
                    };
                    debug!(%source, ?kind, placemarks = document.len(), "document parsed");
                    IngestEvent::DocumentReady {
                        source,
                        kind,
                        document,
                    }
                }
                Err(error) => {
                    warn!(%source, %error, "document fetch failed");
                    IngestEvent::Failed { source, error }
                }
            };

            if events_tx.send(event).await.is_err() {
                debug!("ingest event receiver dropped");
            }
        });
    }

    /// Cancels in-flight work. Safe to call repeatedly.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl<F> Drop for IngestService<F> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// KML documents carry a kml root or Placemark elements; everything else
/// is treated as a feed.
fn classify(text: &str) -> DocumentKind {
    if text.contains("<kml") || text.contains("<Placemark") {
        DocumentKind::Kml
    } else {
        DocumentKind::GeoRss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("<kml><Placemark/></kml>"), DocumentKind::Kml);
        assert_eq!(
            classify("<Placemark><name>x</name></Placemark>"),
            DocumentKind::Kml
        );
        assert_eq!(
            classify("<rss><channel><item/></channel></rss>"),
            DocumentKind::GeoRss
        );
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        struct NeverFetch;
        impl DocumentFetcher for NeverFetch {
            async fn fetch(&self, _source: &str) -> Result<Vec<u8>, FetchError> {
                Err(FetchError::Request("unreachable".to_string()))
            }
        }

        let (service, _rx) = IngestService::new(NeverFetch, IngestConfig::default());
        assert!(!service.is_shut_down());
        service.shutdown();
        service.shutdown();
        assert!(service.is_shut_down());
    }
}
