//! Geographic primitives.
//!
//! Provides the latitude/longitude point and bounding-region types used
//! throughout the crate. A [`BoundingRegion`] is the rectangular lat/lon
//! trapezium covering a set of geometries; overlay additions return one so
//! the screen layer can fit the viewport.

mod types;

pub use types::{
    BoundingRegion, LatLon, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON, MIN_ZOOM,
};
