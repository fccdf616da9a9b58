//! Ordered layer stack with visibility bookkeeping.

use tracing::debug;

use crate::geo::BoundingRegion;
use crate::tilestream::{LayerType, TileStreamSource};

/// What a layer entry refers to.
#[derive(Debug, Clone)]
pub enum LayerKind {
    /// A remote tile-stream layer
    TileStream(TileStreamSource),
    /// An imported data layer, keyed by its overlay source identifier
    Data { source: String },
}

/// One row in the layer browser.
#[derive(Debug, Clone)]
pub struct LayerEntry {
    pub name: String,
    pub kind: LayerKind,
    pub visible: bool,
}

impl LayerEntry {
    fn is_baselayer(&self) -> bool {
        matches!(
            &self.kind,
            LayerKind::TileStream(source) if source.layer_type() == LayerType::Baselayer
        )
    }
}

/// Action for the screen layer to apply after a stack mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerChange {
    /// Start rendering the tile stream at `index`
    ShowTileStream { index: usize },
    /// Stop rendering the tile stream at `index`
    HideTileStream { index: usize },
    /// Add the data layer's overlay (re-parse or re-fetch as needed)
    ShowData { source: String },
    /// Remove the data layer's overlay
    HideData { source: String },
}

/// Ordered collection of layers, bottom-most first.
///
/// At most one baselayer is visible at a time: making a second one
/// visible hides the previous. Overlay tile streams and data layers
/// toggle independently.
#[derive(Debug, Default)]
pub struct LayerStack {
    entries: Vec<LayerEntry>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a hidden layer and returns its index.
    pub fn add(&mut self, name: impl Into<String>, kind: LayerKind) -> usize {
        self.entries.push(LayerEntry {
            name: name.into(),
            kind,
            visible: false,
        });
        self.entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LayerEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[LayerEntry] {
        &self.entries
    }

    /// Flips the visibility of the layer at `index`.
    ///
    /// Returns the changes the screen layer must apply, in order. Showing
    /// a baselayer may yield a hide for the previously visible one.
    /// Out-of-range indices yield no changes.
    pub fn toggle(&mut self, index: usize) -> Vec<LayerChange> {
        let Some(entry) = self.entries.get(index) else {
            debug!(index, "toggle on out-of-range layer ignored");
            return Vec::new();
        };

        let mut changes = Vec::new();
        if entry.visible {
            self.entries[index].visible = false;
            changes.push(self.change_for(index, false));
            return changes;
        }

        // Single visible baselayer: hide the current one first.
        if self.entries[index].is_baselayer() {
            if let Some(previous) = self
                .entries
                .iter()
                .position(|e| e.visible && e.is_baselayer())
            {
                self.entries[previous].visible = false;
                changes.push(self.change_for(previous, false));
            }
        }

        self.entries[index].visible = true;
        changes.push(self.change_for(index, true));
        changes
    }

    /// Moves a layer to a new position, preserving relative order of the
    /// rest. Returns false when either index is out of range.
    pub fn move_layer(&mut self, from: usize, to: usize) -> bool {
        if from >= self.entries.len() || to >= self.entries.len() {
            return false;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        true
    }

    /// Removes the layer at `index`, yielding the hide action when the
    /// layer was visible.
    pub fn remove(&mut self, index: usize) -> Option<(LayerEntry, Option<LayerChange>)> {
        if index >= self.entries.len() {
            return None;
        }
        let change = self.entries[index]
            .visible
            .then(|| self.change_for(index, false));
        Some((self.entries.remove(index), change))
    }

    /// Region to fit the viewport to when the user asks to zoom to a
    /// layer. Data layers answer through the overlay manager instead.
    pub fn zoom_region(&self, index: usize) -> Option<BoundingRegion> {
        match &self.entries.get(index)?.kind {
            LayerKind::TileStream(source) => Some(source.bounding_region()),
            LayerKind::Data { .. } => None,
        }
    }

    fn change_for(&self, index: usize, show: bool) -> LayerChange {
        match &self.entries[index].kind {
            LayerKind::TileStream(_) => {
                if show {
                    LayerChange::ShowTileStream { index }
                } else {
                    LayerChange::HideTileStream { index }
                }
            }
            LayerKind::Data { source } => {
                let source = source.clone();
                if show {
                    LayerChange::ShowData { source }
                } else {
                    LayerChange::HideData { source }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tile_stream(id: &str, kind: &str) -> LayerKind {
        let info = json!({ "id": id, "type": kind });
        LayerKind::TileStream(TileStreamSource::from_info(&info).unwrap())
    }

    fn data(source: &str) -> LayerKind {
        LayerKind::Data {
            source: source.to_string(),
        }
    }

    #[test]
    fn test_layers_start_hidden() {
        let mut stack = LayerStack::new();
        let index = stack.add("Streets", tile_stream("streets", "baselayer"));
        assert!(!stack.get(index).unwrap().visible);
    }

    #[test]
    fn test_toggle_data_layer_round_trip() {
        let mut stack = LayerStack::new();
        let index = stack.add("Trails", data("trails.kml"));

        let changes = stack.toggle(index);
        assert_eq!(
            changes,
            vec![LayerChange::ShowData {
                source: "trails.kml".to_string()
            }]
        );
        assert!(stack.get(index).unwrap().visible);

        let changes = stack.toggle(index);
        assert_eq!(
            changes,
            vec![LayerChange::HideData {
                source: "trails.kml".to_string()
            }]
        );
        assert!(!stack.get(index).unwrap().visible);
    }

    #[test]
    fn test_second_baselayer_hides_first() {
        let mut stack = LayerStack::new();
        let streets = stack.add("Streets", tile_stream("streets", "baselayer"));
        let terrain = stack.add("Terrain", tile_stream("terrain", "baselayer"));

        stack.toggle(streets);
        let changes = stack.toggle(terrain);
        assert_eq!(
            changes,
            vec![
                LayerChange::HideTileStream { index: streets },
                LayerChange::ShowTileStream { index: terrain },
            ]
        );
        assert!(!stack.get(streets).unwrap().visible);
        assert!(stack.get(terrain).unwrap().visible);
    }

    #[test]
    fn test_overlay_streams_do_not_displace_baselayer() {
        let mut stack = LayerStack::new();
        let streets = stack.add("Streets", tile_stream("streets", "baselayer"));
        let contours = stack.add("Contours", tile_stream("contours", "overlay"));

        stack.toggle(streets);
        let changes = stack.toggle(contours);
        assert_eq!(changes, vec![LayerChange::ShowTileStream { index: contours }]);
        assert!(stack.get(streets).unwrap().visible);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let mut stack = LayerStack::new();
        assert!(stack.toggle(3).is_empty());
    }

    #[test]
    fn test_move_layer_preserves_entries() {
        let mut stack = LayerStack::new();
        stack.add("A", data("a"));
        stack.add("B", data("b"));
        stack.add("C", data("c"));

        assert!(stack.move_layer(0, 2));
        let names: Vec<&str> = stack.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert!(!stack.move_layer(0, 9));
    }

    #[test]
    fn test_remove_visible_layer_yields_hide() {
        let mut stack = LayerStack::new();
        let index = stack.add("Trails", data("trails.kml"));
        stack.toggle(index);

        let (entry, change) = stack.remove(index).unwrap();
        assert_eq!(entry.name, "Trails");
        assert_eq!(
            change,
            Some(LayerChange::HideData {
                source: "trails.kml".to_string()
            })
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn test_zoom_region_for_tile_streams_only() {
        let mut stack = LayerStack::new();
        let streets = stack.add("Streets", tile_stream("streets", "baselayer"));
        let trails = stack.add("Trails", data("trails.kml"));

        assert!(stack.zoom_region(streets).is_some());
        assert!(stack.zoom_region(trails).is_none());
    }
}
