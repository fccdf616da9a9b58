//! Layer catalog for the screen layer's browser.
//!
//! The [`LayerStack`] is the ordered list of layers a user can browse,
//! toggle, and reorder: remote tile streams and imported data layers
//! (KML/GeoRSS sources). The stack never touches the map view itself -
//! toggling yields [`LayerChange`] actions the screen layer applies to
//! its renderer or to the overlay manager.

mod stack;

pub use stack::{LayerChange, LayerEntry, LayerKind, LayerStack};
