//! Incident listing models

use serde::{Deserialize, Serialize};

use incident_core::{NumberedIncident, SeverityFilter};

#[derive(Debug, Deserialize, Default)]
pub struct IncidentFilter {
    pub severity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IncidentList {
    pub severity_filter: SeverityFilter,
    pub total: usize,
    pub incidents: Vec<NumberedIncident>,
    /// Numbers that also appear as map markers
    pub mappable_numbers: Vec<usize>,
}
