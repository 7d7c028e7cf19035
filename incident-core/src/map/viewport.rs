//! Map viewport and map settings

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FLY_DURATION_MS, DEFAULT_FOCUS_ZOOM, DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM,
    MAX_FLY_DURATION_MS, MAX_ZOOM, MIN_ZOOM,
};
use crate::error::{CoreError, CoreResult};
use crate::incident::LatLng;

/// Current (or last commanded) map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_MAP_CENTER.0, DEFAULT_MAP_CENTER.1),
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> CoreResult<Self> {
        if !center.is_valid() {
            return Err(CoreError::InvalidCoordinates {
                lat: center.lat,
                lng: center.lng,
            });
        }
        if !zoom.is_finite() || !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
            return Err(CoreError::InvalidZoom(zoom));
        }
        Ok(Self { center, zoom })
    }

    /// Same checks as [`Viewport::new`], for values that bypassed it
    /// (e.g. deserialized from a client snapshot)
    pub fn is_valid(&self) -> bool {
        self.center.is_valid() && self.zoom.is_finite() && (MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom)
    }

    /// Fly-to target for `point`: zoom in up to `focus_zoom`, never out
    pub fn focused_on(&self, point: LatLng, focus_zoom: f64) -> Self {
        Self {
            center: point,
            zoom: self.zoom.max(focus_zoom),
        }
    }
}

/// Tunables for the map binding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub initial_viewport: Viewport,
    /// Usability threshold: fly-to zooms in to at least this level
    pub focus_zoom: f64,
    pub fly_duration_ms: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            initial_viewport: Viewport::default(),
            focus_zoom: DEFAULT_FOCUS_ZOOM,
            fly_duration_ms: DEFAULT_FLY_DURATION_MS,
        }
    }
}

impl MapSettings {
    /// Clamp values a host may have read from the environment
    pub fn sanitized(mut self) -> Self {
        if self.fly_duration_ms > MAX_FLY_DURATION_MS {
            log::warn!(
                "Fly duration {}ms above cap, using {}ms",
                self.fly_duration_ms,
                MAX_FLY_DURATION_MS
            );
            self.fly_duration_ms = MAX_FLY_DURATION_MS;
        }
        if !self.focus_zoom.is_finite() {
            self.focus_zoom = DEFAULT_FOCUS_ZOOM;
        }
        self.focus_zoom = self.focus_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }
}
