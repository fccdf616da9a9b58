//! GeoRSS feed parsing.
//!
//! Handles RSS `<item>` and Atom `<entry>` elements carrying GeoRSS-Simple
//! (`georss:point`, `georss:line`) or W3C Geo (`geo:lat`/`geo:long`)
//! positions. Items without a position are skipped, and malformed input
//! parses to an empty document.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::scan;
use super::{Document, Geometry, Placemark};
use crate::geo::LatLon;

/// Parses GeoRSS feed text into a [`Document`].
///
/// Never fails: input with no locatable items yields an empty document.
pub fn parse(text: &str) -> Document {
    let mut items = scan::blocks(text, "item");
    items.extend(scan::blocks(text, "entry"));

    let mut placemarks = Vec::new();
    for item in items {
        let name = scan::tag_text(item, "title").unwrap_or_default();
        let Some(geometry) = parse_geometry(item) else {
            debug!(title = %name, "skipping feed item without position");
            continue;
        };

        let mut placemark = Placemark::new(name, geometry);
        if let Some(description) =
            scan::tag_text(item, "description").or_else(|| scan::tag_text(item, "summary"))
        {
            placemark = placemark.with_description(description);
        }
        if let Some(published) = parse_published(item) {
            placemark = placemark.with_published(published);
        }
        placemarks.push(placemark);
    }

    Document::new(placemarks)
}

fn parse_geometry(item: &str) -> Option<Geometry> {
    if let Some(point) = scan::tag_text(item, "georss:point") {
        return parse_lat_lon_pairs(&point)
            .first()
            .map(|p| Geometry::Point(*p));
    }

    if let Some(line) = scan::tag_text(item, "georss:line") {
        let points = parse_lat_lon_pairs(&line);
        if points.len() >= 2 {
            return Some(Geometry::LineString(points));
        }
        return None;
    }

    // W3C Geo vocabulary: separate lat/long elements.
    let lat: f64 = scan::tag_text(item, "geo:lat")?.parse().ok()?;
    let lon: f64 = scan::tag_text(item, "geo:long")?.parse().ok()?;
    let point = LatLon::new(lat, lon);
    point.is_valid().then_some(Geometry::Point(point))
}

/// GeoRSS-Simple positions are whitespace-separated `lat lon` pairs.
fn parse_lat_lon_pairs(text: &str) -> Vec<LatLon> {
    let values: Vec<f64> = text
        .split_whitespace()
        .filter_map(|v| v.parse().ok())
        .collect();

    values
        .chunks_exact(2)
        .map(|pair| LatLon::new(pair[0], pair[1]))
        .filter(|p| p.is_valid())
        .collect()
}

fn parse_published(item: &str) -> Option<DateTime<Utc>> {
    if let Some(pub_date) = scan::tag_text(item, "pubDate") {
        if let Ok(parsed) = DateTime::parse_from_rfc2822(&pub_date) {
            return Some(parsed.with_timezone(&Utc));
        }
    }
    let stamp = scan::tag_text(item, "published").or_else(|| scan::tag_text(item, "updated"))?;
    DateTime::parse_from_rfc3339(&stamp)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
