//! Threat Types
//!
//! Aggregates produced upstream (`threat_level.json`). Consumed as given;
//! nothing here recomputes a score.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// TREND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Trend {
    #[serde(rename = "escalating")]
    Escalating,
    #[serde(rename = "de-escalating")]
    DeEscalating,
    #[default]
    #[serde(rename = "stable")]
    Stable,
}

impl Trend {
    /// Anything unrecognised reads as stable
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "escalating" => Trend::Escalating,
            "de-escalating" | "deescalating" | "de_escalating" => Trend::DeEscalating,
            _ => Trend::Stable,
        }
    }
}

fn trend_or_stable<'de, D>(deserializer: D) -> Result<Trend, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(Trend::from_tag).unwrap_or_default())
}

// ============================================================================
// WINDOWS
// ============================================================================

/// Score snapshot over one time horizon. Lower level = more severe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreatWindow {
    #[serde(default)]
    pub score: f64,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub incident_count: u32,
    #[serde(default)]
    pub severity_breakdown: BTreeMap<String, u32>,
    #[serde(default)]
    pub window_hours: Option<u32>,
    #[serde(default)]
    pub computed_at: Option<String>,
}

fn default_level() -> u8 {
    5
}

fn default_label() -> String {
    "UNKNOWN".to_string()
}

impl Default for ThreatWindow {
    fn default() -> Self {
        Self {
            score: 0.0,
            level: default_level(),
            label: default_label(),
            color: None,
            incident_count: 0,
            severity_breakdown: BTreeMap::new(),
            window_hours: None,
            computed_at: None,
        }
    }
}

/// One sparkline sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HistoryPoint {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub incident_count: u32,
}

/// Full `threat_level.json` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ThreatBundle {
    #[serde(default)]
    pub current: ThreatWindow,
    #[serde(default)]
    pub short_term_6h: Option<ThreatWindow>,
    #[serde(default)]
    pub medium_term_48h: Option<ThreatWindow>,
    #[serde(default, deserialize_with = "trend_or_stable")]
    pub trend: Trend,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
