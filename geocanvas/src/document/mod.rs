//! Parsed geo-document model and parsers.
//!
//! A [`Document`] is the structured form of one imported KML file or GeoRSS
//! feed: a list of placemarks with geometry and display metadata. The
//! parsers are deliberately tolerant - malformed or empty input yields an
//! empty document, never an error, so the screen layer can treat "nothing
//! to show" uniformly.
//!
//! # Example
//!
//! ```
//! use geocanvas::document::kml;
//!
//! let doc = kml::parse(
//!     "<kml><Placemark><name>Pier</name>\
//!      <Point><coordinates>7.23,43.67</coordinates></Point>\
//!      </Placemark></kml>",
//! );
//! assert_eq!(doc.len(), 1);
//! ```

pub mod georss;
pub mod kml;
mod scan;
mod types;

pub use types::{Document, Geometry, Placemark};
