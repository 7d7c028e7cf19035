//! Threat display derivation
//!
//! Pure functions of the upstream values. Recomputed on every render,
//! never cached.

use std::collections::BTreeMap;

use serde::Serialize;

use super::types::{HistoryPoint, ThreatBundle, ThreatWindow, Trend};
use crate::constants::{SPARKLINE_MIN_BAR_PCT, THREAT_LEVELS};

// ============================================================================
// TREND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendIndicator {
    pub glyph: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

pub fn trend_indicator(trend: Trend) -> TrendIndicator {
    match trend {
        Trend::Escalating => TrendIndicator {
            glyph: "▲",
            color: "#DC2626",
            label: "Escalating",
        },
        Trend::DeEscalating => TrendIndicator {
            glyph: "▼",
            color: "#16A34A",
            label: "De-escalating",
        },
        Trend::Stable => TrendIndicator {
            glyph: "▶",
            color: "#6B7280",
            label: "Stable",
        },
    }
}

// ============================================================================
// BUCKETS
// ============================================================================

/// Bucket color for a score (five fixed floors: 30 / 15 / 6 / 2 / 0)
pub fn score_color(score: f64) -> &'static str {
    THREAT_LEVELS
        .iter()
        .find(|(floor, ..)| score >= *floor)
        .map_or(THREAT_LEVELS[THREAT_LEVELS.len() - 1].3, |&(.., color)| color)
}

/// Color for a discrete level (1 = most severe)
pub fn level_color(level: u8) -> &'static str {
    THREAT_LEVELS
        .iter()
        .find(|(_, l, ..)| *l == level)
        .map_or(THREAT_LEVELS[THREAT_LEVELS.len() - 1].3, |&(.., color)| color)
}

// ============================================================================
// SPARKLINE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparkBar {
    pub timestamp: String,
    pub score: f64,
    /// Percent of the tallest bar, never below the minimum visible height
    pub height_pct: f64,
    pub color: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sparkline {
    pub max_score: f64,
    pub bars: Vec<SparkBar>,
}

/// `None` with fewer than two points; a single bar says nothing
pub fn sparkline(history: &[HistoryPoint]) -> Option<Sparkline> {
    if history.len() < 2 {
        return None;
    }

    let max_score = history
        .iter()
        .map(|h| h.score)
        .filter(|s| s.is_finite())
        .fold(0.0_f64, f64::max);

    let bars = history
        .iter()
        .map(|h| {
            let ratio = if max_score > 0.0 && h.score.is_finite() {
                (h.score.max(0.0) / max_score) * 100.0
            } else {
                0.0
            };
            SparkBar {
                timestamp: h.timestamp.clone(),
                score: h.score,
                height_pct: ratio.max(SPARKLINE_MIN_BAR_PCT),
                color: score_color(h.score),
                label: h.label.clone(),
            }
        })
        .collect();

    Some(Sparkline { max_score, bars })
}

// ============================================================================
// PANEL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowView {
    pub score: f64,
    pub level: u8,
    pub label: String,
    pub color: String,
    pub incident_count: u32,
    pub severity_breakdown: BTreeMap<String, u32>,
}

impl WindowView {
    pub fn build(window: &ThreatWindow) -> Self {
        Self {
            score: window.score,
            level: window.level,
            label: window.label.clone(),
            color: window
                .color
                .clone()
                .unwrap_or_else(|| level_color(window.level).to_string()),
            incident_count: window.incident_count,
            severity_breakdown: window.severity_breakdown.clone(),
        }
    }
}

/// Threat panel shown next to the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreatDisplay {
    pub current: WindowView,
    pub short_term: Option<WindowView>,
    pub medium_term: Option<WindowView>,
    pub trend: TrendIndicator,
    pub sparkline: Option<Sparkline>,
    pub updated_at: Option<String>,
}

impl ThreatDisplay {
    pub fn derive(bundle: &ThreatBundle) -> Self {
        Self {
            current: WindowView::build(&bundle.current),
            short_term: bundle.short_term_6h.as_ref().map(WindowView::build),
            medium_term: bundle.medium_term_48h.as_ref().map(WindowView::build),
            trend: trend_indicator(bundle.trend),
            sparkline: sparkline(&bundle.history),
            updated_at: bundle.updated_at.clone(),
        }
    }
}
