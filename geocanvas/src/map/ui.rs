//! Transient-info and timer capabilities.
//!
//! The popover and the pulse timer are UI-toolkit objects in a real host;
//! the manager sees them only through these traits so the core stays
//! toolkit-free and testable.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Content shown in the transient marker popover.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerInfo {
    pub title: String,
    pub detail: String,
    /// Publication timestamp for feed-derived markers
    pub published: Option<DateTime<Utc>>,
}

/// Host surface for transient info: the marker popover and the status
/// stripe. All methods are safe to call redundantly.
pub trait InfoHost {
    /// Shows (or updates in place) the marker popover.
    fn show(&mut self, info: &MarkerInfo);

    /// Dismisses the popover if one is open.
    fn dismiss(&mut self);

    /// Replaces the transient status-stripe text. Advisory only.
    fn show_status(&mut self, status: &str);
}

/// Inert host for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullInfoHost;

impl InfoHost for NullInfoHost {
    fn show(&mut self, _info: &MarkerInfo) {}
    fn dismiss(&mut self) {}
    fn show_status(&mut self, _status: &str) {}
}

/// The single recurring timer behind marker pulsing.
///
/// A real host arms its event-loop timer in `start` and calls
/// [`OverlayManager::pulse_tick`](crate::overlay::OverlayManager::pulse_tick)
/// on each fire. `stop` must be idempotent: stopping an already-stopped
/// scheduler is a no-op.
pub trait PulseScheduler {
    fn start(&mut self, interval: Duration);
    fn stop(&mut self);
    fn is_active(&self) -> bool;
}

/// Scheduler the host (or a test) drives by hand.
///
/// Tracks the requested interval and start/stop transitions without owning
/// a timer; redundant transitions are ignored.
#[derive(Debug, Default)]
pub struct ManualPulseScheduler {
    active: bool,
    interval: Option<Duration>,
    starts: u32,
    stops: u32,
}

impl ManualPulseScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval requested by the most recent `start`.
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Number of inactive-to-active transitions.
    pub fn starts(&self) -> u32 {
        self.starts
    }

    /// Number of active-to-inactive transitions.
    pub fn stops(&self) -> u32 {
        self.stops
    }
}

impl PulseScheduler for ManualPulseScheduler {
    fn start(&mut self, interval: Duration) {
        self.interval = Some(interval);
        if !self.active {
            self.active = true;
            self.starts += 1;
        }
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.stops += 1;
        }
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
