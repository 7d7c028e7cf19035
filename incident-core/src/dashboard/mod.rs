//! Dashboard - single owner of the selection cell
//!
//! Holds records, the active filter, the derived numbering and the one
//! selection value. Both bindings read the selection by reference; only
//! [`Dashboard::set_selection`] and [`Dashboard::set_severity_filter`]
//! write it.
//!
//! # Transition flow
//! 1. Guard the trigger against the current numbered view
//! 2. Compute the next selection (pure)
//! 3. Commit, let both bindings queue their effects
//! 4. Drain the queue into the returned [`Transition`]

pub mod state;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::effects::EffectQueue;
use crate::filter::{SeverityCounts, SeverityFilter};
use crate::incident::IncidentRecord;
use crate::list::ListBinding;
use crate::map::{MapBinding, MapSettings};
use crate::numbering::{NumberedIncident, NumberedView};
use crate::selection::{self, Origin, Selection, Trigger};

pub use state::{DashboardFrame, DashboardState, Outcome, Transition, UiEvent};

#[derive(Debug)]
pub struct Dashboard {
    records: Vec<Arc<IncidentRecord>>,
    counts: SeverityCounts,
    filter: SeverityFilter,
    selection: Selection,
    view: NumberedView,
    map: MapBinding,
    list: ListBinding,
    effects: EffectQueue,
}

impl Dashboard {
    pub fn new(records: Vec<Arc<IncidentRecord>>, settings: MapSettings) -> Self {
        Self::restore(records, settings, DashboardState::default())
    }

    /// Rebuild a session from its snapshot
    pub fn restore(records: Vec<Arc<IncidentRecord>>, settings: MapSettings, state: DashboardState) -> Self {
        let view = NumberedView::derive(&records, state.severity_filter);
        let viewport = match state.viewport {
            Some(v) if v.is_valid() => v,
            Some(v) => {
                log::warn!("Discarding out-of-range viewport {:?}, using initial view", v);
                settings.initial_viewport
            }
            None => settings.initial_viewport,
        };

        let mut list = ListBinding::new();
        list.mount_rows(&view);

        Self {
            counts: SeverityCounts::tally(&records),
            records,
            filter: state.severity_filter,
            selection: state.selection,
            view,
            map: MapBinding::restore(settings, viewport, state.popup, state.flight_target),
            list,
            effects: EffectQueue::new(),
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        DashboardState {
            severity_filter: self.filter,
            selection: self.selection.clone(),
            viewport: Some(self.map.viewport()),
            popup: self.map.popup().cloned(),
            flight_target: self.map.flight_target().cloned(),
        }
    }

    /// Swap in freshly loaded records. The filter stays; a selection whose
    /// incident disappeared becomes inert.
    pub fn replace_records(&mut self, records: Vec<Arc<IncidentRecord>>) {
        self.counts = SeverityCounts::tally(&records);
        self.records = records;
        self.view = NumberedView::derive(&self.records, self.filter);
        self.list.mount_rows(&self.view);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn records(&self) -> &[Arc<IncidentRecord>] {
        &self.records
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected incident under the current numbering, `None` when stale
    pub fn selected(&self) -> Option<&NumberedIncident> {
        self.selection.id().and_then(|id| self.view.get(id))
    }

    pub fn severity_filter(&self) -> SeverityFilter {
        self.filter
    }

    pub fn numbered_incidents(&self) -> &[NumberedIncident] {
        self.view.numbered()
    }

    pub fn mappable_incidents(&self) -> &[NumberedIncident] {
        self.view.mappable()
    }

    pub fn counts(&self) -> SeverityCounts {
        self.counts
    }

    pub fn map(&self) -> &MapBinding {
        &self.map
    }

    pub fn list(&self) -> &ListBinding {
        &self.list
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Route a raw UI event to the matching transition
    pub fn dispatch(&mut self, event: UiEvent) -> Transition {
        match event {
            UiEvent::CardClicked(id) => self.set_selection(Trigger::ListCardClick(id)),
            UiEvent::BadgeClicked(id) => self.set_selection(Trigger::ListBadgeClick(id)),
            UiEvent::MarkerClicked(id) => self.set_selection(Trigger::MapMarkerClick(id)),
            UiEvent::JumpToList(id) => self.set_selection(Trigger::PopupJumpToList(id)),
            UiEvent::FilterSelected(filter) => self.set_severity_filter(filter),
            UiEvent::PopupClosed => {
                self.map.close_popup(&mut self.effects);
                self.applied(self.selection.clone())
            }
            UiEvent::ViewportMoved(viewport) => {
                self.map.on_viewport_moved(viewport);
                self.applied(self.selection.clone())
            }
        }
    }

    /// The selection entry point
    pub fn set_selection(&mut self, trigger: Trigger) -> Transition {
        if let Some(reason) = self.guard(&trigger) {
            log::debug!("Ignored {:?}: {}", trigger, reason);
            return Transition {
                outcome: Outcome::Ignored(reason),
                previous: self.selection.clone(),
                selection: self.selection.clone(),
                effects: Vec::new(),
            };
        }
        self.commit(trigger)
    }

    /// Switch filter tab. Always renumbers from 1 and clears the selection.
    pub fn set_severity_filter(&mut self, filter: SeverityFilter) -> Transition {
        if filter != self.filter {
            log::debug!("Severity filter {} -> {}", self.filter, filter);
        }
        self.filter = filter;
        self.view = NumberedView::derive(&self.records, filter);
        self.list.mount_rows(&self.view);
        self.map.on_filter_change(&mut self.effects);
        self.commit(Trigger::FilterChange)
    }

    fn guard(&self, trigger: &Trigger) -> Option<&'static str> {
        let id = trigger.target()?;
        if !self.view.contains(id) {
            return Some("incident not in current list");
        }
        match trigger.origin() {
            Origin::ListBadge if !self.view.is_mappable(id) => Some("badge has no marker to focus"),
            Origin::MapMarker | Origin::PopupJump if !self.view.is_mappable(id) => {
                Some("incident has no marker")
            }
            _ => None,
        }
    }

    fn commit(&mut self, trigger: Trigger) -> Transition {
        let previous = self.selection.clone();
        let origin = trigger.origin();
        self.selection = selection::next(&previous, &trigger);

        self.map.on_selection_change(&self.view, &self.selection, origin, &mut self.effects);
        self.list.on_selection_change(&self.view, &self.selection, origin, &mut self.effects);

        Transition {
            outcome: Outcome::Applied,
            previous,
            selection: self.selection.clone(),
            effects: self.effects.drain(),
        }
    }

    fn applied(&mut self, selection: Selection) -> Transition {
        Transition {
            outcome: Outcome::Applied,
            previous: selection.clone(),
            selection,
            effects: self.effects.drain(),
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn render(&self, now: DateTime<Utc>) -> DashboardFrame {
        let selected = self.selected();
        DashboardFrame {
            severity_filter: self.filter,
            selection: selected.map(|n| n.id().clone()),
            selected_number: selected.map(|n| n.number),
            counts: self.counts,
            list: self.list.render(&self.view, &self.selection, self.records.len(), now),
            map: self.map.render(&self.view, &self.selection, now),
        }
    }
}
