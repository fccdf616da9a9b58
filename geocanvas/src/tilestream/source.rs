//! Tile-stream metadata source

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::geo::{BoundingRegion, LatLon, MAX_ZOOM};

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Default native zoom range when the info dictionary omits one.
pub const DEFAULT_MIN_TILE_ZOOM: u8 = 0;
pub const DEFAULT_MAX_TILE_ZOOM: u8 = 18;

/// Errors building a tile-stream source from an info dictionary.
#[derive(Debug, Error)]
pub enum TileStreamError {
    /// The info payload was not valid JSON.
    #[error("failed to parse tile stream info: {0}")]
    Json(#[from] serde_json::Error),

    /// The info dictionary is structurally unusable.
    #[error("invalid tile stream info: {0}")]
    InvalidInfo(String),
}

/// How a tile stream composes with other layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerType {
    /// Opaque base imagery; at most one is shown at a time
    Baselayer,
    /// Partially transparent imagery drawn over the base
    Overlay,
}

/// Fields we read from a TileJSON-style info dictionary. Everything else
/// is preserved verbatim in the raw value.
#[derive(Debug, Deserialize)]
struct RawInfo {
    id: Option<String>,
    name: Option<String>,
    attribution: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    minzoom: Option<f64>,
    maxzoom: Option<f64>,
    /// `[west, south, east, north]`, TileJSON order
    bounds: Option<Vec<f64>>,
    tilesize: Option<u32>,
}

/// Metadata for one remote tile-stream layer.
///
/// Built from an info dictionary the host has already fetched; absent
/// fields fall back to the documented defaults (256 px tiles, zoom
/// 0-18, world bounding box).
///
/// # Example
///
/// ```
/// use geocanvas::tilestream::{LayerType, TileStreamSource};
///
/// let info = serde_json::json!({
///     "id": "streets",
///     "name": "Streets",
///     "minzoom": 2,
///     "maxzoom": 15,
/// });
/// let source = TileStreamSource::from_info(&info).unwrap();
/// assert_eq!(source.layer_type(), LayerType::Baselayer);
/// assert_eq!(source.min_zoom_native(), 2);
/// assert!(source.covers_full_world());
/// ```
#[derive(Debug, Clone)]
pub struct TileStreamSource {
    info: Value,
    id: String,
    name: String,
    attribution: String,
    layer_type: LayerType,
    min_zoom: u8,
    max_zoom: u8,
    tile_size: u32,
    bounds: BoundingRegion,
}

impl TileStreamSource {
    /// Builds a source from raw TileJSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, TileStreamError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_info(&value)
    }

    /// Builds a source from an already-parsed info dictionary.
    pub fn from_info(info: &Value) -> Result<Self, TileStreamError> {
        if !info.is_object() {
            return Err(TileStreamError::InvalidInfo(
                "info payload is not an object".to_string(),
            ));
        }
        let raw: RawInfo = serde_json::from_value(info.clone())?;

        let id = raw
            .id
            .or_else(|| raw.name.clone())
            .ok_or_else(|| TileStreamError::InvalidInfo("missing id and name".to_string()))?;
        let name = raw.name.unwrap_or_else(|| id.clone());

        let layer_type = match raw.kind.as_deref() {
            Some("overlay") => LayerType::Overlay,
            _ => LayerType::Baselayer,
        };

        let min_zoom = zoom_or(raw.minzoom, DEFAULT_MIN_TILE_ZOOM);
        let max_zoom = zoom_or(raw.maxzoom, DEFAULT_MAX_TILE_ZOOM);
        let bounds = raw
            .bounds
            .as_deref()
            .and_then(parse_bounds)
            .unwrap_or(BoundingRegion::WORLD);

        Ok(Self {
            info: info.clone(),
            id,
            name,
            attribution: raw.attribution.unwrap_or_default(),
            layer_type,
            min_zoom: min_zoom.min(max_zoom),
            max_zoom,
            tile_size: raw.tilesize.unwrap_or(DEFAULT_TILE_SIZE),
            bounds,
        })
    }

    /// The raw info dictionary the source was built from.
    pub fn info(&self) -> &Value {
        &self.info
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribution(&self) -> &str {
        &self.attribution
    }

    pub fn layer_type(&self) -> LayerType {
        self.layer_type
    }

    /// Lowest zoom the service renders natively.
    pub fn min_zoom_native(&self) -> u8 {
        self.min_zoom
    }

    /// Highest zoom the service renders natively.
    pub fn max_zoom_native(&self) -> u8 {
        self.max_zoom
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Declared coverage of the stream.
    pub fn bounding_region(&self) -> BoundingRegion {
        self.bounds
    }

    /// True when the declared bounds reach the Web Mercator world extent.
    pub fn covers_full_world(&self) -> bool {
        let world = BoundingRegion::WORLD;
        self.bounds.southwest.lat <= world.southwest.lat
            && self.bounds.southwest.lon <= world.southwest.lon
            && self.bounds.northeast.lat >= world.northeast.lat
            && self.bounds.northeast.lon >= world.northeast.lon
    }

    pub fn supports_zoom(&self, zoom: u8) -> bool {
        (self.min_zoom..=self.max_zoom).contains(&zoom)
    }
}

fn zoom_or(value: Option<f64>, default: u8) -> u8 {
    match value {
        Some(z) if z.is_finite() => z.clamp(0.0, MAX_ZOOM as f64) as u8,
        _ => default,
    }
}

/// TileJSON bounds are `[west, south, east, north]`.
fn parse_bounds(bounds: &[f64]) -> Option<BoundingRegion> {
    if bounds.len() != 4 {
        return None;
    }
    let southwest = LatLon::new(bounds[1], bounds[0]);
    let northeast = LatLon::new(bounds[3], bounds[2]);
    if !southwest.is_valid() || !northeast.is_valid() {
        return None;
    }
    Some(BoundingRegion::new(southwest, northeast))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_when_fields_absent() {
        let source = TileStreamSource::from_info(&json!({ "id": "base" })).unwrap();
        assert_eq!(source.min_zoom_native(), DEFAULT_MIN_TILE_ZOOM);
        assert_eq!(source.max_zoom_native(), DEFAULT_MAX_TILE_ZOOM);
        assert_eq!(source.tile_size(), DEFAULT_TILE_SIZE);
        assert_eq!(source.bounding_region(), BoundingRegion::WORLD);
        assert!(source.covers_full_world());
        assert_eq!(source.layer_type(), LayerType::Baselayer);
    }

    #[test]
    fn test_explicit_fields() {
        let info = json!({
            "id": "contours",
            "name": "Contour lines",
            "type": "overlay",
            "attribution": "Survey data",
            "minzoom": 8,
            "maxzoom": 14,
            "tilesize": 512,
            "bounds": [-10.0, 35.0, 5.0, 45.0],
        });
        let source = TileStreamSource::from_info(&info).unwrap();
        assert_eq!(source.id(), "contours");
        assert_eq!(source.name(), "Contour lines");
        assert_eq!(source.layer_type(), LayerType::Overlay);
        assert_eq!(source.attribution(), "Survey data");
        assert_eq!(source.min_zoom_native(), 8);
        assert_eq!(source.max_zoom_native(), 14);
        assert_eq!(source.tile_size(), 512);
        assert!(!source.covers_full_world());

        let region = source.bounding_region();
        assert_eq!(region.southwest, LatLon::new(35.0, -10.0));
        assert_eq!(region.northeast, LatLon::new(45.0, 5.0));
    }

    #[test]
    fn test_name_falls_back_to_id_and_vice_versa() {
        let source = TileStreamSource::from_info(&json!({ "name": "Terrain" })).unwrap();
        assert_eq!(source.id(), "Terrain");

        let source = TileStreamSource::from_info(&json!({ "id": "terrain" })).unwrap();
        assert_eq!(source.name(), "terrain");
    }

    #[test]
    fn test_missing_identity_is_an_error() {
        let result = TileStreamSource::from_info(&json!({ "minzoom": 3 }));
        assert!(matches!(result, Err(TileStreamError::InvalidInfo(_))));
    }

    #[test]
    fn test_non_object_info_is_an_error() {
        let result = TileStreamSource::from_info(&json!([1, 2, 3]));
        assert!(matches!(result, Err(TileStreamError::InvalidInfo(_))));
    }

    #[test]
    fn test_from_json_bytes() {
        let source =
            TileStreamSource::from_json(br#"{"id": "base", "maxzoom": 12}"#).unwrap();
        assert_eq!(source.max_zoom_native(), 12);
        let bad = TileStreamSource::from_json(b"not json");
        assert!(matches!(bad, Err(TileStreamError::Json(_))));
    }

    #[test]
    fn test_zoom_clamping_and_ordering() {
        let info = json!({ "id": "x", "minzoom": 30, "maxzoom": 25 });
        let source = TileStreamSource::from_info(&info).unwrap();
        assert_eq!(source.max_zoom_native(), MAX_ZOOM);
        assert!(source.min_zoom_native() <= source.max_zoom_native());
    }

    #[test]
    fn test_supports_zoom() {
        let info = json!({ "id": "x", "minzoom": 5, "maxzoom": 10 });
        let source = TileStreamSource::from_info(&info).unwrap();
        assert!(!source.supports_zoom(4));
        assert!(source.supports_zoom(5));
        assert!(source.supports_zoom(10));
        assert!(!source.supports_zoom(11));
    }

    #[test]
    fn test_malformed_bounds_fall_back_to_world() {
        let info = json!({ "id": "x", "bounds": [1.0, 2.0] });
        let source = TileStreamSource::from_info(&info).unwrap();
        assert_eq!(source.bounding_region(), BoundingRegion::WORLD);

        let info = json!({ "id": "x", "bounds": [-200.0, -95.0, 200.0, 95.0] });
        let source = TileStreamSource::from_info(&info).unwrap();
        assert_eq!(source.bounding_region(), BoundingRegion::WORLD);
    }
}
