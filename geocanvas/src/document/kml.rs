//! KML document parsing.
//!
//! Extracts `<Placemark>` elements with Point, LineString, or Polygon
//! geometry. KML coordinate tuples are `lon,lat[,alt]`; altitude is
//! ignored. Placemarks without usable geometry are skipped with a log
//! entry, and malformed input parses to an empty document.

use tracing::debug;

use super::scan;
use super::{Document, Geometry, Placemark};
use crate::geo::LatLon;

/// Parses KML text into a [`Document`].
///
/// Never fails: input with no extractable placemarks yields an empty
/// document.
pub fn parse(text: &str) -> Document {
    let mut placemarks = Vec::new();

    for block in scan::blocks(text, "Placemark") {
        let name = scan::tag_text(block, "name").unwrap_or_default();
        let Some(geometry) = parse_geometry(block) else {
            debug!(name = %name, "skipping placemark without usable geometry");
            continue;
        };

        let mut placemark = Placemark::new(name, geometry);
        if let Some(description) = scan::tag_text(block, "description") {
            placemark = placemark.with_description(description);
        }
        placemarks.push(placemark);
    }

    Document::new(placemarks)
}

fn parse_geometry(block: &str) -> Option<Geometry> {
    if let Some(point) = scan::blocks(block, "Point").first() {
        let coords = scan::tag_text(point, "coordinates")?;
        return parse_coordinates(&coords).first().map(|p| Geometry::Point(*p));
    }

    if let Some(line) = scan::blocks(block, "LineString").first() {
        let coords = scan::tag_text(line, "coordinates")?;
        let points = parse_coordinates(&coords);
        if points.len() >= 2 {
            return Some(Geometry::LineString(points));
        }
        return None;
    }

    if let Some(polygon) = scan::blocks(block, "Polygon").first() {
        // The outer ring's coordinates are nested under outerBoundaryIs/
        // LinearRing; tag_text finds the first coordinates element, which
        // is the outer ring in well-formed KML.
        let coords = scan::tag_text(polygon, "coordinates")?;
        let points = parse_coordinates(&coords);
        if points.len() >= 3 {
            return Some(Geometry::Polygon(points));
        }
    }

    None
}

/// Parses whitespace-separated `lon,lat[,alt]` tuples, dropping malformed
/// or out-of-range entries.
fn parse_coordinates(text: &str) -> Vec<LatLon> {
    text.split_whitespace()
        .filter_map(|tuple| {
            let mut parts = tuple.split(',');
            let lon: f64 = parts.next()?.trim().parse().ok()?;
            let lat: f64 = parts.next()?.trim().parse().ok()?;
            let point = LatLon::new(lat, lon);
            point.is_valid().then_some(point)
        })
        .collect()
}
