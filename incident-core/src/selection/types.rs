//! Selection Types
//!
//! The selection cell and the triggers allowed to mutate it.

use serde::{Deserialize, Serialize};

use crate::incident::IncidentId;

// ============================================================================
// SELECTION
// ============================================================================

/// At most one focused incident. No history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<IncidentId>", into = "Option<IncidentId>")]
pub enum Selection {
    #[default]
    Unselected,
    Selected(IncidentId),
}

impl Selection {
    pub fn id(&self) -> Option<&IncidentId> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(id) => Some(id),
        }
    }

    pub fn is_selected(&self, id: &IncidentId) -> bool {
        self.id() == Some(id)
    }

    pub fn is_unselected(&self) -> bool {
        matches!(self, Selection::Unselected)
    }
}

impl From<Option<IncidentId>> for Selection {
    fn from(id: Option<IncidentId>) -> Self {
        id.map_or(Selection::Unselected, Selection::Selected)
    }
}

impl From<Selection> for Option<IncidentId> {
    fn from(s: Selection) -> Self {
        match s {
            Selection::Unselected => None,
            Selection::Selected(id) => Some(id),
        }
    }
}

// ============================================================================
// TRIGGERS
// ============================================================================

/// Where a selection change came from. Decides the side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Card body on the list
    ListCard,
    /// Numbered badge on a list card
    ListBadge,
    /// Marker on the map
    MapMarker,
    /// "Jump to list" control inside a marker popup
    PopupJump,
    /// Severity filter tab
    FilterChange,
}

impl Origin {
    /// Focus origins always select; only the card body toggles
    pub fn is_focus(&self) -> bool {
        matches!(self, Origin::ListBadge | Origin::MapMarker | Origin::PopupJump)
    }

    /// Selection arrived from the map side
    pub fn is_map_originated(&self) -> bool {
        matches!(self, Origin::MapMarker | Origin::PopupJump)
    }
}

/// The only inputs that may mutate a [`Selection`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "trigger", content = "id", rename_all = "snake_case")]
pub enum Trigger {
    ListCardClick(IncidentId),
    ListBadgeClick(IncidentId),
    MapMarkerClick(IncidentId),
    PopupJumpToList(IncidentId),
    FilterChange,
}

impl Trigger {
    pub fn origin(&self) -> Origin {
        match self {
            Trigger::ListCardClick(_) => Origin::ListCard,
            Trigger::ListBadgeClick(_) => Origin::ListBadge,
            Trigger::MapMarkerClick(_) => Origin::MapMarker,
            Trigger::PopupJumpToList(_) => Origin::PopupJump,
            Trigger::FilterChange => Origin::FilterChange,
        }
    }

    pub fn target(&self) -> Option<&IncidentId> {
        match self {
            Trigger::ListCardClick(id)
            | Trigger::ListBadgeClick(id)
            | Trigger::MapMarkerClick(id)
            | Trigger::PopupJumpToList(id) => Some(id),
            Trigger::FilterChange => None,
        }
    }
}
