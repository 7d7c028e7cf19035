//! Filter Engine
//!
//! Reduces the incident set to one severity. Pure, order-preserving,
//! idempotent.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::COLOR_ALL;
use crate::error::CoreError;
use crate::incident::{IncidentRecord, Severity};

/// Active severity filter tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeverityFilter {
    #[default]
    All,
    #[serde(alias = "critical")]
    Major,
    High,
    Medium,
    Low,
}

impl SeverityFilter {
    /// Tab order
    pub const TABS: [SeverityFilter; 5] = [
        SeverityFilter::All,
        SeverityFilter::Major,
        SeverityFilter::High,
        SeverityFilter::Medium,
        SeverityFilter::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityFilter::All => "all",
            SeverityFilter::Major => "major",
            SeverityFilter::High => "high",
            SeverityFilter::Medium => "medium",
            SeverityFilter::Low => "low",
        }
    }

    /// The severity this filter admits, `None` for "all"
    pub fn severity(&self) -> Option<Severity> {
        match self {
            SeverityFilter::All => None,
            SeverityFilter::Major => Some(Severity::Major),
            SeverityFilter::High => Some(Severity::High),
            SeverityFilter::Medium => Some(Severity::Medium),
            SeverityFilter::Low => Some(Severity::Low),
        }
    }

    pub fn color(&self) -> &'static str {
        self.severity().map_or(COLOR_ALL, |s| s.color())
    }

    pub fn matches(&self, record: &IncidentRecord) -> bool {
        match self.severity() {
            None => true,
            Some(wanted) => record.severity() == Some(wanted),
        }
    }
}

impl From<Severity> for SeverityFilter {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Major => SeverityFilter::Major,
            Severity::High => SeverityFilter::High,
            Severity::Medium => SeverityFilter::Medium,
            Severity::Low => SeverityFilter::Low,
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("all") || tag.is_empty() {
            return Ok(SeverityFilter::All);
        }
        Severity::from_tag(tag)
            .map(SeverityFilter::from)
            .ok_or_else(|| CoreError::UnknownSeverity(s.to_string()))
    }
}

impl std::fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subset of `records` admitted by `filter`, in input order
pub fn apply(records: &[Arc<IncidentRecord>], filter: SeverityFilter) -> Vec<Arc<IncidentRecord>> {
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

/// Counts shown on the filter tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub all: usize,
    pub major: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn tally(records: &[Arc<IncidentRecord>]) -> Self {
        let mut counts = Self {
            all: records.len(),
            ..Default::default()
        };
        for severity in records.iter().filter_map(|r| r.severity()) {
            match severity {
                Severity::Major => counts.major += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }

    pub fn get(&self, filter: SeverityFilter) -> usize {
        match filter {
            SeverityFilter::All => self.all,
            SeverityFilter::Major => self.major,
            SeverityFilter::High => self.high,
            SeverityFilter::Medium => self.medium,
            SeverityFilter::Low => self.low,
        }
    }
}
