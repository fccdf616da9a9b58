//! Document model types

use chrono::{DateTime, Utc};

use crate::geo::{BoundingRegion, LatLon};

/// Geometry of a single placemark.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// A single tappable point
    Point(LatLon),
    /// An open path with at least two vertices
    LineString(Vec<LatLon>),
    /// A closed ring with at least three vertices
    Polygon(Vec<LatLon>),
}

impl Geometry {
    /// All vertices of the geometry, in document order.
    pub fn points(&self) -> &[LatLon] {
        match self {
            Geometry::Point(p) => std::slice::from_ref(p),
            Geometry::LineString(v) | Geometry::Polygon(v) => v,
        }
    }
}

/// One renderable feature from a parsed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    /// Display title (feed item title or KML name; may be empty)
    pub name: String,
    /// Longer display text (KML description or feed item body)
    pub description: String,
    pub geometry: Geometry,
    /// Publication timestamp, when the source carried one (GeoRSS items)
    pub published: Option<DateTime<Utc>>,
}

impl Placemark {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            geometry,
            published: None,
        }
    }

    /// Convenience constructor for a point placemark.
    pub fn point(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::new(name, Geometry::Point(LatLon::new(lat, lon)))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.published = Some(published);
        self
    }
}

/// A parsed KML document or GeoRSS feed.
///
/// An empty document is the normal result for input with no renderable
/// placemarks; it is not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub placemarks: Vec<Placemark>,
}

impl Document {
    pub fn new(placemarks: Vec<Placemark>) -> Self {
        Self { placemarks }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.placemarks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placemarks.len()
    }

    /// All geometry vertices across every placemark.
    pub fn points(&self) -> impl Iterator<Item = LatLon> + '_ {
        self.placemarks
            .iter()
            .flat_map(|p| p.geometry.points().iter().copied())
    }

    /// Union bounding box of the document's geometry.
    ///
    /// [`BoundingRegion::ZERO`] when the document is empty.
    pub fn bounding_region(&self) -> BoundingRegion {
        BoundingRegion::from_points(self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLon;

    #[test]
    fn test_geometry_points() {
        let point = Geometry::Point(LatLon::new(1.0, 2.0));
        assert_eq!(point.points(), &[LatLon::new(1.0, 2.0)]);

        let line = Geometry::LineString(vec![LatLon::new(0.0, 0.0), LatLon::new(1.0, 1.0)]);
        assert_eq!(line.points().len(), 2);
    }

    #[test]
    fn test_bounding_region_spans_placemarks() {
        let doc = Document::new(vec![
            Placemark::point("a", 10.0, 10.0),
            Placemark::point("b", 20.0, 20.0),
        ]);
        let region = doc.bounding_region();
        assert_eq!(region.southwest, LatLon::new(10.0, 10.0));
        assert_eq!(region.northeast, LatLon::new(20.0, 20.0));
    }

    #[test]
    fn test_empty_document_has_zero_region() {
        assert!(Document::empty().bounding_region().is_zero());
    }
}
