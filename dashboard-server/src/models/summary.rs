//! Executive summary & archive index models
//!
//! Rendered as static text and links only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExecutiveSummary {
    pub generated_at: Option<String>,
    pub threat_snapshot: Option<SummaryThreatSnapshot>,
    pub source_count: Option<SourceCount>,
    pub executive_summary: String,
    pub whats_new: Vec<String>,
    pub confirmed_events: Vec<String>,
    pub unverified_emerging: Vec<String>,
    pub operational_impacts: OperationalImpacts,
    pub outlook_24_72h: Outlook,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SummaryThreatSnapshot {
    pub level: u8,
    pub label: String,
    pub color: Option<String>,
    pub trend: String,
    pub incident_count_24h: u32,
    pub incident_count_6h: u32,
    pub severity_breakdown: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SourceCount {
    pub attacks_analyzed: u32,
    pub articles_analyzed: u32,
    pub regions_covered: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OperationalImpacts {
    pub people_travel: Vec<String>,
    pub supply_chain: Vec<String>,
    pub market_macro: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Outlook {
    pub base_case: String,
    pub escalation_risks: Vec<String>,
    pub de_escalation_pathways: String,
}

/// One row of `summary_archive/index.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArchiveEntry {
    pub filename: String,
    pub generated_at: String,
    pub threat_label: String,
    pub threat_level: u8,
    pub trend: String,
    pub incident_count_24h: u32,
    pub summary_preview: String,
}

/// Archive row plus its download link
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveLink {
    #[serde(flatten)]
    pub entry: ArchiveEntry,
    pub href: String,
}

impl ArchiveLink {
    pub fn new(entry: ArchiveEntry) -> Self {
        let href = format!("/data/summary_archive/{}", entry.filename);
        Self { entry, href }
    }
}
