//! Map-view abstraction and UI capabilities.
//!
//! The overlay manager drives a concrete map widget through the small
//! traits in this module instead of depending on any UI toolkit:
//!
//! - [`MapView`] - install/remove shape groups and toggle marker pulsing
//! - [`InfoHost`] - transient popover and status-stripe surface
//! - [`PulseScheduler`] - the single recurring timer behind marker pulsing
//!
//! The host wires its widget set to these traits once and forwards user
//! interaction back as [`MapEvent`] values.

mod events;
mod ui;
mod view;

pub use events::MapEvent;
pub use ui::{InfoHost, ManualPulseScheduler, MarkerInfo, NullInfoHost, PulseScheduler};
pub use view::{InstalledLayer, LayerHandle, LayerSpec, MapView, MarkerId};
