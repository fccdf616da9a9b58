//! Overlay lifecycle management.

use tracing::{debug, info};

use super::marker_info::MarkerInfoCache;
use crate::config::OverlayConfig;
use crate::document::{georss, Document, Geometry};
use crate::geo::BoundingRegion;
use crate::map::{
    InfoHost, LayerHandle, LayerSpec, ManualPulseScheduler, MapEvent, MapView, MarkerId,
    MarkerInfo, NullInfoHost, PulseScheduler,
};

/// One marker installed for a point placemark.
#[derive(Debug, Clone)]
struct OverlayMarker {
    id: MarkerId,
    info: MarkerInfo,
    pulses: bool,
}

/// One overlay group, attributed to a single source.
#[derive(Debug, Clone)]
struct OverlayEntry {
    source: String,
    layers: Vec<LayerHandle>,
    markers: Vec<OverlayMarker>,
    region: BoundingRegion,
    placemark_count: usize,
}

impl OverlayEntry {
    fn animated(&self) -> bool {
        self.markers.iter().any(|m| m.pulses)
    }
}

/// Read-only snapshot of one active overlay.
///
/// Returned by [`OverlayManager::overlays`]; mutating a snapshot never
/// affects manager state.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySnapshot {
    /// Source identifier the overlay was added under
    pub source: String,
    /// Map-view handles owned by the overlay
    pub layers: Vec<LayerHandle>,
    /// Union bounding region of the overlay's geometry
    pub region: BoundingRegion,
    pub placemark_count: usize,
    pub marker_count: usize,
    /// True when at least one marker of this overlay pulses
    pub animated: bool,
}

/// Mediates all additions and removals of map overlays.
///
/// Guarantees source-keyed uniqueness (adding under an existing source
/// supersedes the prior overlay), aggregates bounding regions for viewport
/// fitting, and coordinates the transient popover and the single pulse
/// timer. The manager holds the map view exclusively and runs entirely on
/// the host's UI thread; nothing here blocks.
///
/// # Example
///
/// ```
/// use geocanvas::document::kml;
/// use geocanvas::overlay::OverlayManager;
/// # use geocanvas::map::{InstalledLayer, LayerHandle, LayerSpec, MapView, MarkerId};
/// # use geocanvas::geo::BoundingRegion;
/// # struct Widget(u64);
/// # impl MapView for Widget {
/// #     fn add_layer(&mut self, _spec: LayerSpec) -> InstalledLayer {
/// #         self.0 += 1;
/// #         InstalledLayer { handle: LayerHandle(self.0), marker: Some(MarkerId(self.0)) }
/// #     }
/// #     fn remove_layer(&mut self, _handle: LayerHandle) {}
/// #     fn set_marker_pulse(&mut self, _marker: MarkerId, _highlighted: bool) {}
/// #     fn viewport(&self) -> BoundingRegion { BoundingRegion::WORLD }
/// # }
///
/// let mut manager = OverlayManager::new(Widget(0));
/// let doc = kml::parse(
///     "<Placemark><name>Pier</name>\
///      <Point><coordinates>7.23,43.67</coordinates></Point></Placemark>",
/// );
/// let region = manager.add_kml_overlay("harbor.kml", &doc);
/// assert!(!region.is_zero());
/// assert_eq!(manager.overlays().len(), 1);
/// ```
pub struct OverlayManager<M: MapView> {
    map: M,
    overlays: Vec<OverlayEntry>,
    marker_info: MarkerInfoCache,
    info_host: Box<dyn InfoHost>,
    scheduler: Box<dyn PulseScheduler>,
    config: OverlayConfig,
    pulse_phase: bool,
    popover_open: bool,
}

impl<M: MapView> OverlayManager<M> {
    /// Binds the manager to its map view.
    ///
    /// The view must already be fully configured; attaching it to a
    /// visible hierarchy is the caller's responsibility. Popover and timer
    /// hosting default to inert implementations until the builder setters
    /// supply real ones.
    pub fn new(map: M) -> Self {
        let config = OverlayConfig::default();
        Self {
            map,
            overlays: Vec::new(),
            marker_info: MarkerInfoCache::new(config.marker_info_capacity),
            info_host: Box::new(NullInfoHost),
            scheduler: Box::new(ManualPulseScheduler::new()),
            config,
            pulse_phase: false,
            popover_open: false,
        }
    }

    pub fn with_info_host(mut self, host: Box<dyn InfoHost>) -> Self {
        self.info_host = host;
        self
    }

    pub fn with_pulse_scheduler(mut self, scheduler: Box<dyn PulseScheduler>) -> Self {
        self.scheduler = scheduler;
        self
    }

    pub fn with_config(mut self, config: OverlayConfig) -> Self {
        self.marker_info = MarkerInfoCache::new(config.marker_info_capacity);
        self.config = config;
        self
    }

    /// The bound map view.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Adds an overlay group for a parsed KML document under `source`.
    ///
    /// Any overlay previously added under the same source is superseded.
    /// Returns the union bounding region of the newly added geometry, or
    /// [`BoundingRegion::ZERO`] when the document has no renderable
    /// placemarks (the overlay set is then left unchanged).
    pub fn add_kml_overlay(&mut self, source: &str, document: &Document) -> BoundingRegion {
        self.install(source, document, false)
    }

    /// Adds an overlay group for GeoRSS feed text under `source`.
    ///
    /// Same contract as [`add_kml_overlay`](Self::add_kml_overlay); feed
    /// markers pulse until their source is removed.
    pub fn add_georss_overlay(&mut self, source: &str, feed: &str) -> BoundingRegion {
        let document = georss::parse(feed);
        self.install(source, &document, true)
    }

    fn install(&mut self, source: &str, document: &Document, pulses: bool) -> BoundingRegion {
        let region = document.bounding_region();
        if document.points().next().is_none() {
            debug!(source, "no renderable placemarks, overlay set unchanged");
            return BoundingRegion::ZERO;
        }

        // Source-keyed uniqueness: supersede any prior overlay.
        self.remove_overlay_with_source(source);

        let mut layers = Vec::with_capacity(document.len());
        let mut markers = Vec::new();
        for placemark in &document.placemarks {
            let tappable = matches!(placemark.geometry, Geometry::Point(_));
            let installed = self.map.add_layer(LayerSpec {
                geometry: placemark.geometry.clone(),
                title: placemark.name.clone(),
                alpha: self.config.placemark_alpha,
                tappable,
            });
            layers.push(installed.handle);
            if let Some(id) = installed.marker {
                markers.push(OverlayMarker {
                    id,
                    info: MarkerInfo {
                        title: placemark.name.clone(),
                        detail: placemark.description.clone(),
                        published: placemark.published,
                    },
                    pulses,
                });
            }
        }

        info!(
            source,
            placemarks = document.len(),
            markers = markers.len(),
            %region,
            "installed overlay"
        );

        self.overlays.push(OverlayEntry {
            source: source.to_string(),
            layers,
            markers,
            region,
            placemark_count: document.len(),
        });
        self.sync_pulse_timer();

        region
    }

    /// Removes the overlay group added under `source`.
    ///
    /// No-op when the source is not present. Evicts the source's
    /// marker-info cache entries and stops the pulse timer when the last
    /// animated source goes away.
    pub fn remove_overlay_with_source(&mut self, source: &str) {
        let Some(position) = self.overlays.iter().position(|o| o.source == source) else {
            return;
        };
        let entry = self.overlays.remove(position);
        for handle in &entry.layers {
            self.map.remove_layer(*handle);
        }
        self.marker_info.evict_source(source);
        self.sync_pulse_timer();
        info!(source, layers = entry.layers.len(), "removed overlay");
    }

    /// Clears the entire overlay set.
    ///
    /// Also clears the marker-info cache, stops the pulse timer, and
    /// dismisses any open popover.
    pub fn remove_all_overlays(&mut self) {
        let removed = self.overlays.len();
        for entry in std::mem::take(&mut self.overlays) {
            for handle in entry.layers {
                self.map.remove_layer(handle);
            }
        }
        self.marker_info.clear();
        self.scheduler.stop();
        self.dismiss_popover();
        if removed > 0 {
            info!(removed, "removed all overlays");
        }
    }

    /// Snapshot of the active overlays, in insertion order.
    pub fn overlays(&self) -> Vec<OverlaySnapshot> {
        self.overlays
            .iter()
            .map(|entry| OverlaySnapshot {
                source: entry.source.clone(),
                layers: entry.layers.clone(),
                region: entry.region,
                placemark_count: entry.placemark_count,
                marker_count: entry.markers.len(),
                animated: entry.animated(),
            })
            .collect()
    }

    /// Dispatches one map interaction event.
    pub fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::MarkerTapped { marker } => self.show_marker_info(marker),
            MapEvent::MarkerDeselected => self.dismiss_popover(),
            MapEvent::ViewportChanged { region } => {
                // Stripe refresh only; nothing here affects overlay state.
                let status = format!(
                    "{} overlays \u{00b7} centered {}",
                    self.overlays.len(),
                    region.center()
                );
                self.info_host.show_status(&status);
            }
        }
    }

    /// Advances the pulse phase of every animated marker.
    ///
    /// Wired to the host timer armed through the [`PulseScheduler`].
    pub fn pulse_tick(&mut self) {
        self.pulse_phase = !self.pulse_phase;
        let phase = self.pulse_phase;
        for entry in &self.overlays {
            for marker in entry.markers.iter().filter(|m| m.pulses) {
                self.map.set_marker_pulse(marker.id, phase);
            }
        }
    }

    /// Whether the pulse timer is currently running.
    pub fn is_pulse_active(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Number of cached marker-info entries.
    pub fn marker_info_len(&self) -> usize {
        self.marker_info.len()
    }

    /// Whether a marker currently has a cached info entry.
    pub fn has_marker_info(&self, marker: MarkerId) -> bool {
        self.marker_info.contains(marker)
    }

    fn show_marker_info(&mut self, marker: MarkerId) {
        let info = match self.marker_info.get(marker) {
            Some(cached) => Some(cached.clone()),
            None => {
                let found = self.overlays.iter().find_map(|entry| {
                    entry
                        .markers
                        .iter()
                        .find(|m| m.id == marker)
                        .map(|m| (entry.source.clone(), m.info.clone()))
                });
                found.map(|(source, info)| {
                    self.marker_info.insert(marker, &source, info.clone());
                    info
                })
            }
        };

        if let Some(info) = info {
            self.info_host.show(&info);
            self.popover_open = true;
        } else {
            debug!(%marker, "tap on unknown marker ignored");
        }
    }

    fn dismiss_popover(&mut self) {
        if self.popover_open {
            self.info_host.dismiss();
            self.popover_open = false;
        }
    }

    /// Runs the timer iff at least one animated marker exists, across all
    /// sources.
    fn sync_pulse_timer(&mut self) {
        let any_animated = self.overlays.iter().any(|o| o.animated());
        if any_animated {
            if !self.scheduler.is_active() {
                self.scheduler.start(self.config.pulse_interval);
            }
        } else {
            self.scheduler.stop();
        }
    }
}
