//! List card view

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::focus::FocusHandle;
use crate::incident::{category_icon, category_label, recency_of, IncidentId, Severity};
use crate::numbering::NumberedIncident;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: IncidentId,
    pub number: usize,
    /// Scroll anchor, present while the row is mounted
    pub focus_handle: Option<FocusHandle>,
    /// Badge refocuses the map only when the incident has a marker
    pub badge_clickable: bool,
    /// Selected card gets the emphasized border/background
    pub selected: bool,
    pub severity: Option<Severity>,
    pub severity_color: &'static str,
    pub category: Option<String>,
    pub category_icon: Option<&'static str>,
    pub region: Option<String>,
    pub source_name: Option<String>,
    pub recency: String,
    pub headline: String,
    pub url: Option<String>,
    pub brief: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub parties: Vec<String>,
}

impl CardView {
    pub fn build(
        incident: &NumberedIncident,
        selected: bool,
        focus_handle: Option<FocusHandle>,
        now: DateTime<Utc>,
    ) -> Self {
        let record = &incident.record;
        let classification = record.classification.as_ref();
        let severity = record.severity();

        Self {
            id: incident.id().clone(),
            number: incident.number,
            focus_handle,
            badge_clickable: incident.is_mappable(),
            selected,
            severity,
            severity_color: severity.unwrap_or_default().color(),
            category: classification.map(|c| category_label(&c.category)),
            category_icon: classification.map(|c| category_icon(&c.category)),
            region: record.region.clone(),
            source_name: record.source_name.clone(),
            recency: recency_of(record, now).label(),
            headline: record.headline().to_string(),
            url: record.url.clone(),
            brief: classification
                .map(|c| c.brief.trim())
                .filter(|b| !b.is_empty())
                .map(str::to_string),
            summary: record
                .summary_en
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            location: classification.and_then(|c| c.known_location()).map(str::to_string),
            parties: classification.map(|c| c.parties_involved.clone()).unwrap_or_default(),
        }
    }
}
