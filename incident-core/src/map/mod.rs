//! Map View Binding
//!
//! Draws the mappable subset and moves the viewport when a focusing
//! selection lands on a marker.
//!
//! ## Structure
//! - `viewport`: Viewport, MapSettings
//! - `marker`: MarkerView, PopupView
//!
//! ## Viewport rules
//! - Only marker, badge and popup selections fly; card-body clicks never do
//! - Selecting an incident without a marker leaves the viewport alone
//! - Fly-to zooms in to the focus level but never zooms out
//! - No second fly-to while the viewport still sits on the last target;
//!   a manual pan or a filter change forgets that target
//! - Only a marker click opens the popup
//! - Opening or closing a popup never moves the viewport

pub mod viewport;
pub mod marker;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::effects::{Effect, EffectQueue};
use crate::incident::IncidentId;
use crate::numbering::NumberedView;
use crate::selection::{Origin, Selection};

pub use marker::{MarkerView, PopupView};
pub use viewport::{MapSettings, Viewport};

pub const EMPTY_MAP_MESSAGE: &str = "No geolocated attack events yet.";

/// Everything a map renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFrame {
    pub viewport: Viewport,
    pub markers: Vec<MarkerView>,
    pub popup: Option<PopupView>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug)]
pub struct MapBinding {
    settings: MapSettings,
    viewport: Viewport,
    popup: Option<IncidentId>,
    /// Last fly-to target, `None` once the user moved the map
    flight_target: Option<IncidentId>,
}

impl MapBinding {
    pub fn new(settings: MapSettings) -> Self {
        Self {
            settings,
            viewport: settings.initial_viewport,
            popup: None,
            flight_target: None,
        }
    }

    /// Rebuild from a host-held snapshot
    pub fn restore(
        settings: MapSettings,
        viewport: Viewport,
        popup: Option<IncidentId>,
        flight_target: Option<IncidentId>,
    ) -> Self {
        Self {
            settings,
            viewport,
            popup,
            flight_target,
        }
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn popup(&self) -> Option<&IncidentId> {
        self.popup.as_ref()
    }

    pub fn flight_target(&self) -> Option<&IncidentId> {
        self.flight_target.as_ref()
    }

    /// User panned or zoomed by hand
    pub fn on_viewport_moved(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.flight_target = None;
    }

    /// React to a committed selection change
    pub fn on_selection_change(
        &mut self,
        view: &NumberedView,
        current: &Selection,
        origin: Origin,
        effects: &mut EffectQueue,
    ) {
        if !origin.is_focus() {
            return;
        }
        let Some(id) = current.id() else {
            return;
        };
        let Some(incident) = view.get(id).filter(|n| n.is_mappable()) else {
            log::debug!("Incident {} has no marker, viewport stays put", id);
            return;
        };
        let Some(point) = incident.record.coordinates() else {
            return;
        };

        if origin == Origin::MapMarker {
            self.open_popup(id, effects);
        }

        if self.flight_target.as_ref() == Some(id) {
            log::debug!("Viewport already on incident {}, fly-to skipped", id);
            return;
        }

        // Last write wins: a newer target simply replaces the running flight
        self.viewport = self.viewport.focused_on(point, self.settings.focus_zoom);
        self.flight_target = Some(id.clone());
        effects.push(Effect::FlyTo {
            id: id.clone(),
            center: self.viewport.center,
            zoom: self.viewport.zoom,
            duration_ms: self.settings.fly_duration_ms,
        });
    }

    /// Filter tabs changed; the popup's marker may be gone
    pub fn on_filter_change(&mut self, effects: &mut EffectQueue) {
        self.flight_target = None;
        self.close_popup(effects);
    }

    pub fn open_popup(&mut self, id: &IncidentId, effects: &mut EffectQueue) {
        if self.popup.as_ref() == Some(id) {
            return;
        }
        self.popup = Some(id.clone());
        effects.push(Effect::OpenPopup { id: id.clone() });
    }

    pub fn close_popup(&mut self, effects: &mut EffectQueue) {
        if self.popup.take().is_some() {
            effects.push(Effect::ClosePopup);
        }
    }

    pub fn render(&self, view: &NumberedView, selection: &Selection, now: DateTime<Utc>) -> MapFrame {
        let markers: Vec<MarkerView> = view
            .mappable()
            .iter()
            .filter_map(|n| MarkerView::build(n, selection.is_selected(n.id())))
            .collect();

        let popup = self
            .popup
            .as_ref()
            .and_then(|id| view.get(id))
            .filter(|n| n.is_mappable())
            .map(|n| PopupView::build(n, now));

        MapFrame {
            viewport: self.viewport,
            empty_message: markers.is_empty().then_some(EMPTY_MAP_MESSAGE),
            markers,
            popup,
        }
    }
}

#[cfg(test)]
mod tests;
