//! Map-view collaborator trait

use std::fmt;

use crate::document::Geometry;
use crate::geo::BoundingRegion;

/// Opaque handle to one shape/annotation group installed on the map view.
///
/// Handles are allocated by the map view and are only meaningful to the
/// view that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerHandle(pub u64);

impl fmt::Display for LayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// Opaque identifier for a tappable marker on the map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}

/// What the overlay manager asks the map view to draw for one placemark.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSpec {
    pub geometry: Geometry,
    /// Marker/shape title, shown by the view's own affordances
    pub title: String,
    /// Fill/stroke opacity, 0.0 to 1.0
    pub alpha: f32,
    /// Point placemarks get a tappable marker; shapes do not
    pub tappable: bool,
}

/// Result of installing one [`LayerSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstalledLayer {
    pub handle: LayerHandle,
    /// Present when the spec was tappable and the view created a marker
    pub marker: Option<MarkerId>,
}

/// The map-view collaborator.
///
/// Mutations are not thread-safe; the overlay manager holds the view
/// exclusively and serializes every call onto the UI thread (the manager
/// itself only runs there).
pub trait MapView {
    /// Installs a shape/annotation group and returns its handle, plus the
    /// marker id when the spec was tappable.
    fn add_layer(&mut self, spec: LayerSpec) -> InstalledLayer;

    /// Removes a previously installed group. Unknown handles are ignored.
    fn remove_layer(&mut self, handle: LayerHandle);

    /// Turns the pulsing highlight for a marker on or off.
    fn set_marker_pulse(&mut self, marker: MarkerId, highlighted: bool);

    /// Current visible region.
    fn viewport(&self) -> BoundingRegion;
}
