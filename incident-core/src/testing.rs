//! Shared fixtures for unit tests

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::incident::{Classification, IncidentRecord, Severity};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()
}

pub fn attack(id: &str, severity: Severity, coords: Option<(f64, f64)>) -> Arc<IncidentRecord> {
    let mut r = IncidentRecord::new(id, format!("Incident {}", id));
    r.title_en = Some(format!("Strike {}", id));
    r.url = Some(format!("https://news.example/{}", id));
    r.source_name = Some("Wire".to_string());
    r.region = Some("iran".to_string());
    r.published = Some("2026-03-02T11:30:00Z".to_string());
    r.lat = coords.map(|c| c.0);
    r.lng = coords.map(|c| c.1);
    r.classification = Some(Classification {
        is_attack: true,
        category: "drone_strike".to_string(),
        severity,
        brief: format!("Brief {}", id),
        location: "Persian Gulf".to_string(),
        parties_involved: vec!["IRGC".to_string(), "US Navy".to_string()],
    });
    Arc::new(r)
}

/// A(high, mapped), B(low, no coords), C(high, mapped)
pub fn scenario() -> Vec<Arc<IncidentRecord>> {
    vec![
        attack("A", Severity::High, Some((33.3, 44.4))),
        attack("B", Severity::Low, None),
        attack("C", Severity::High, Some((26.5, 56.2))),
    ]
}
