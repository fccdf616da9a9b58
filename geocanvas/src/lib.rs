//! GeoCanvas - overlay and layer management for a tiled-map client
//!
//! This library is the in-process core behind a slippy-map screen: it
//! owns the lifecycle of user-imported overlays (KML documents and GeoRSS
//! feeds), the metadata describing remote tile-stream layers, and the
//! ordered layer stack the user browses. Rendering, tile fetching, and
//! gesture handling stay in the host; the core drives the map widget
//! through the small traits in [`map`].
//!
//! # High-Level API
//!
//! ```ignore
//! use geocanvas::document::kml;
//! use geocanvas::overlay::OverlayManager;
//!
//! let mut manager = OverlayManager::new(map_widget);
//!
//! let document = kml::parse(&file_contents);
//! let region = manager.add_kml_overlay("trails.kml", &document);
//! if !region.is_zero() {
//!     // fit the viewport to `region`
//! }
//! ```

pub mod config;
pub mod document;
pub mod geo;
pub mod ingest;
pub mod layers;
pub mod logging;
pub mod map;
pub mod overlay;
pub mod tilestream;

/// Version of the geocanvas library.
///
/// Synchronized across the workspace; defined in `Cargo.toml` and
/// injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
