//! Incidents handlers

use axum::{extract::{State, Query}, Json};

use incident_core::{NumberedView, SeverityCounts, SeverityFilter};

use crate::{AppState, AppResult};
use crate::models::{IncidentFilter, IncidentList};

/// List numbered incidents under a severity filter
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<IncidentFilter>,
) -> AppResult<Json<IncidentList>> {
    let severity: SeverityFilter = filter.severity.as_deref().unwrap_or("").parse()?;
    let snapshot = state.store.snapshot();
    let view = NumberedView::derive(&snapshot.attacks, severity);

    Ok(Json(IncidentList {
        severity_filter: severity,
        total: view.len(),
        mappable_numbers: view.mappable().iter().map(|n| n.number).collect(),
        incidents: view.numbered().to_vec(),
    }))
}

/// Per-severity counts for the filter tabs
pub async fn counts(State(state): State<AppState>) -> Json<SeverityCounts> {
    Json(SeverityCounts::tally(&state.store.snapshot().attacks))
}
