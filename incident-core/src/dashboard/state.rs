//! Dashboard Types
//!
//! Session snapshot, UI events, and what a committed transition returns.

use serde::{Deserialize, Serialize};

use crate::effects::Effect;
use crate::filter::{SeverityCounts, SeverityFilter};
use crate::incident::IncidentId;
use crate::list::ListFrame;
use crate::map::{MapFrame, Viewport};
use crate::selection::Selection;

/// Everything a session needs to rebuild its dashboard.
///
/// Hosts that do not keep sessions hand this to the client and take it
/// back on the next interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardState {
    pub severity_filter: SeverityFilter,
    pub selection: Selection,
    /// `None` until the map has been shown once
    pub viewport: Option<Viewport>,
    pub popup: Option<IncidentId>,
    /// Incident the viewport was last flown to
    pub flight_target: Option<IncidentId>,
}

/// Raw user interactions, before guards
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Click anywhere on a list card except its badge
    CardClicked(IncidentId),
    /// Click on a list card's numbered badge
    BadgeClicked(IncidentId),
    MarkerClicked(IncidentId),
    /// "Show in list" inside a marker popup
    JumpToList(IncidentId),
    PopupClosed,
    /// Manual pan / zoom
    ViewportMoved(Viewport),
    FilterSelected(SeverityFilter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Outcome {
    Applied,
    /// Inert input; state untouched, no effects
    Ignored(&'static str),
}

/// Result of one synchronous interaction handler
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub outcome: Outcome,
    pub previous: Selection,
    pub selection: Selection,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }

    pub fn changed_selection(&self) -> bool {
        self.previous != self.selection
    }
}

/// One render of both views plus the shared controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardFrame {
    pub severity_filter: SeverityFilter,
    /// Effective selection; a stale id reads as none
    pub selection: Option<IncidentId>,
    pub selected_number: Option<usize>,
    pub counts: SeverityCounts,
    pub list: ListFrame,
    pub map: MapFrame,
}
