//! Marker & popup views

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::{
    MARKER_OUTLINE, MARKER_OUTLINE_SELECTED, MARKER_SELECTED_GROWTH, MARKER_SIZE, MARKER_SIZE_WIDE,
};
use crate::incident::{category_label, recency_of, IncidentId, LatLng, Severity};
use crate::numbering::NumberedIncident;

/// Circular numbered badge drawn on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub id: IncidentId,
    pub number: usize,
    pub position: LatLng,
    pub severity: Severity,
    pub color: &'static str,
    /// Diameter in px
    pub size: u32,
    pub outline: &'static str,
    pub outline_width: u32,
    pub selected: bool,
}

impl MarkerView {
    /// `None` for incidents that cannot be mapped
    pub fn build(incident: &NumberedIncident, selected: bool) -> Option<Self> {
        if !incident.is_mappable() {
            return None;
        }
        let position = incident.record.coordinates()?;
        let severity = incident.record.severity().unwrap_or_default();

        let base = if incident.number > 99 { MARKER_SIZE_WIDE } else { MARKER_SIZE };
        let (size, outline, outline_width) = if selected {
            (base + MARKER_SELECTED_GROWTH, MARKER_OUTLINE_SELECTED, 3)
        } else {
            (base, MARKER_OUTLINE, 2)
        };

        Some(Self {
            id: incident.id().clone(),
            number: incident.number,
            position,
            severity,
            color: severity.color(),
            size,
            outline,
            outline_width,
            selected,
        })
    }
}

/// Detail popup attached to a marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupView {
    pub id: IncidentId,
    pub number: usize,
    /// `#n headline`
    pub title: String,
    pub url: Option<String>,
    pub location: Option<String>,
    pub recency: String,
    pub severity: Severity,
    pub severity_color: &'static str,
    pub category: Option<String>,
    pub brief: Option<String>,
    /// The "show in list" control (jump-to-list trigger)
    pub can_jump_to_list: bool,
}

impl PopupView {
    pub fn build(incident: &NumberedIncident, now: DateTime<Utc>) -> Self {
        let record = &incident.record;
        let classification = record.classification.as_ref();
        let severity = record.severity().unwrap_or_default();

        Self {
            id: incident.id().clone(),
            number: incident.number,
            title: format!("#{} {}", incident.number, record.headline()),
            url: record.url.clone(),
            location: classification.and_then(|c| c.known_location()).map(str::to_string),
            recency: recency_of(record, now).label(),
            severity,
            severity_color: severity.color(),
            category: classification.map(|c| category_label(&c.category)),
            brief: classification
                .map(|c| c.brief.trim())
                .filter(|b| !b.is_empty())
                .map(str::to_string),
            can_jump_to_list: true,
        }
    }
}
