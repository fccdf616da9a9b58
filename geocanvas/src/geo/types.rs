//! Coordinate and bounding-region type definitions

use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Standard slippy-map zoom levels
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 18;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Checks that both components are inside the valid geographic range.
    pub fn is_valid(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.lat) && (MIN_LON..=MAX_LON).contains(&self.lon)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// A rectangular lat/lon extent, defined by its southwest and northeast
/// corners.
///
/// Overlay additions return the union bounding region of the geometry they
/// installed; [`BoundingRegion::ZERO`] signals "nothing renderable" without
/// being an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub southwest: LatLon,
    pub northeast: LatLon,
}

impl BoundingRegion {
    /// The zero-area region at the origin, returned when an add operation
    /// had no renderable geometry.
    pub const ZERO: BoundingRegion = BoundingRegion {
        southwest: LatLon { lat: 0.0, lon: 0.0 },
        northeast: LatLon { lat: 0.0, lon: 0.0 },
    };

    /// The Web Mercator world extent used as the default tile-stream
    /// bounding box: SW(-85, -180) to NE(85, 180).
    pub const WORLD: BoundingRegion = BoundingRegion {
        southwest: LatLon {
            lat: -85.0,
            lon: -180.0,
        },
        northeast: LatLon {
            lat: 85.0,
            lon: 180.0,
        },
    };

    pub fn new(southwest: LatLon, northeast: LatLon) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// Builds the union bounding box of a point set.
    ///
    /// Returns [`BoundingRegion::ZERO`] for an empty set.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = LatLon>,
    {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::ZERO;
        };

        let mut region = BoundingRegion {
            southwest: first,
            northeast: first,
        };
        for p in iter {
            region.southwest.lat = region.southwest.lat.min(p.lat);
            region.southwest.lon = region.southwest.lon.min(p.lon);
            region.northeast.lat = region.northeast.lat.max(p.lat);
            region.northeast.lon = region.northeast.lon.max(p.lon);
        }
        region
    }

    /// True for the degenerate zero-area region at the origin.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Componentwise min/max merge of two regions.
    ///
    /// A zero region acts as the identity, so callers can fold add-overlay
    /// results without special-casing empty documents.
    pub fn union(&self, other: &BoundingRegion) -> BoundingRegion {
        if self.is_zero() {
            return *other;
        }
        if other.is_zero() {
            return *self;
        }
        BoundingRegion {
            southwest: LatLon::new(
                self.southwest.lat.min(other.southwest.lat),
                self.southwest.lon.min(other.southwest.lon),
            ),
            northeast: LatLon::new(
                self.northeast.lat.max(other.northeast.lat),
                self.northeast.lon.max(other.northeast.lon),
            ),
        }
    }

    pub fn contains(&self, point: LatLon) -> bool {
        (self.southwest.lat..=self.northeast.lat).contains(&point.lat)
            && (self.southwest.lon..=self.northeast.lon).contains(&point.lon)
    }

    /// Midpoint of the region.
    pub fn center(&self) -> LatLon {
        LatLon::new(
            (self.southwest.lat + self.northeast.lat) / 2.0,
            (self.southwest.lon + self.northeast.lon) / 2.0,
        )
    }
}

impl fmt::Display for BoundingRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.southwest, self.northeast)
    }
}
