//! Map interaction events

use super::view::MarkerId;
use crate::geo::BoundingRegion;

/// User interaction forwarded from the map view.
///
/// The host translates its widget callbacks into this one event type and
/// dispatches through
/// [`handle_event`](crate::overlay::OverlayManager::handle_event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// A marker was tapped or selected
    MarkerTapped { marker: MarkerId },
    /// The selected marker was deselected, or the map was tapped elsewhere
    MarkerDeselected,
    /// The visible region changed (pan/zoom settled)
    ViewportChanged { region: BoundingRegion },
}
