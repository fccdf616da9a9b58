//! Configuration types for geocanvas components.
//!
//! One struct per concern, with `DEFAULT_*` constants and `with_*`
//! setters so call sites only spell out what they change.

use std::time::Duration;

/// Default fill/stroke opacity for imported placemarks.
pub const DEFAULT_PLACEMARK_ALPHA: f32 = 0.7;

/// Default interval between marker pulse phases (1 second).
pub const DEFAULT_PULSE_INTERVAL_MS: u64 = 1_000;

/// Default bound on cached marker-info entries.
pub const DEFAULT_MARKER_INFO_CAPACITY: usize = 64;

/// Tuning for the overlay manager.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Fill/stroke opacity applied to imported placemark layers.
    pub placemark_alpha: f32,

    /// Interval between pulse phases while any animated marker exists.
    pub pulse_interval: Duration,

    /// Maximum number of marker-info entries kept; the oldest entry is
    /// evicted first.
    pub marker_info_capacity: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            placemark_alpha: DEFAULT_PLACEMARK_ALPHA,
            pulse_interval: Duration::from_millis(DEFAULT_PULSE_INTERVAL_MS),
            marker_info_capacity: DEFAULT_MARKER_INFO_CAPACITY,
        }
    }
}

impl OverlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the placemark opacity, clamped to 0.0 to 1.0.
    pub fn with_placemark_alpha(mut self, alpha: f32) -> Self {
        self.placemark_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_pulse_interval(mut self, interval: Duration) -> Self {
        self.pulse_interval = interval;
        self
    }

    pub fn with_marker_info_capacity(mut self, capacity: usize) -> Self {
        self.marker_info_capacity = capacity.max(1);
        self
    }
}

/// Default event-channel capacity for the ingest worker.
pub const DEFAULT_INGEST_CHANNEL_CAPACITY: usize = 16;

/// Tuning for the document ingest worker.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Capacity of the event channel drained by the UI thread.
    pub channel_capacity: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_INGEST_CHANNEL_CAPACITY,
        }
    }
}

impl IngestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_defaults() {
        let config = OverlayConfig::default();
        assert!((config.placemark_alpha - DEFAULT_PLACEMARK_ALPHA).abs() < f32::EPSILON);
        assert_eq!(
            config.pulse_interval,
            Duration::from_millis(DEFAULT_PULSE_INTERVAL_MS)
        );
        assert_eq!(config.marker_info_capacity, DEFAULT_MARKER_INFO_CAPACITY);
    }

    #[test]
    fn test_overlay_builder_clamps() {
        let config = OverlayConfig::new()
            .with_placemark_alpha(1.7)
            .with_marker_info_capacity(0);
        assert!((config.placemark_alpha - 1.0).abs() < f32::EPSILON);
        assert_eq!(config.marker_info_capacity, 1);
    }

    #[test]
    fn test_ingest_builder() {
        let config = IngestConfig::new().with_channel_capacity(4);
        assert_eq!(config.channel_capacity, 4);
    }
}
