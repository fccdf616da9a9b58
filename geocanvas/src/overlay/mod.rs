//! Overlay lifecycle management for a map view.
//!
//! The [`OverlayManager`] owns the set of active overlays and their source
//! attribution, plus the auxiliary UI state around them: the transient
//! marker popover, the last-shown marker-info cache, and the single
//! recurring timer that drives marker pulsing.
//!
//! # Lifecycle
//!
//! Per source key, an overlay is `absent` until an `add_*` call installs
//! it, `active` while installed, and `absent` again after removal. Adding
//! under an already-active source supersedes (removes, then re-adds) the
//! prior overlay, so at most one overlay group per source is ever active.
//! The pulse timer runs exactly while at least one animated marker exists
//! across all sources.
//!
//! Recoverable conditions never surface as errors: an add with no
//! renderable geometry returns a zero region, and removal of an unknown
//! source is a no-op.

mod manager;
mod marker_info;

pub use manager::{OverlayManager, OverlaySnapshot};
