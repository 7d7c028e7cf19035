//! Recency labels ("5m ago")
//!
//! Publication time drives the label. When a source stamps an article in
//! the future (skewed clock) the fetch time is used instead.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use super::types::IncidentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Recency {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Unknown,
}

impl Recency {
    pub fn from_elapsed(elapsed: chrono::Duration) -> Self {
        let minutes = elapsed.num_minutes().max(0);
        if minutes < 1 {
            Recency::JustNow
        } else if minutes < 60 {
            Recency::Minutes(minutes)
        } else if minutes < 60 * 24 {
            Recency::Hours(minutes / 60)
        } else {
            Recency::Days(minutes / (60 * 24))
        }
    }

    pub fn label(&self) -> String {
        match self {
            Recency::JustNow => "just now".to_string(),
            Recency::Minutes(m) => format!("{}m ago", m),
            Recency::Hours(h) => format!("{}h ago", h),
            Recency::Days(d) => format!("{}d ago", d),
            Recency::Unknown => "unknown time".to_string(),
        }
    }
}

/// Parse the timestamp formats the feeds emit.
///
/// Naive timestamps are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Recency of a record relative to `now`
pub fn recency_of(record: &IncidentRecord, now: DateTime<Utc>) -> Recency {
    let Some(published) = record.published.as_deref().and_then(parse_timestamp) else {
        return Recency::Unknown;
    };

    if published <= now {
        return Recency::from_elapsed(now - published);
    }

    // Clock-skew guard
    match record.fetched_at.as_deref().and_then(parse_timestamp) {
        Some(fetched) if fetched <= now => Recency::from_elapsed(now - fetched),
        _ => Recency::JustNow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap()
    }

    fn record(published: Option<&str>, fetched: Option<&str>) -> IncidentRecord {
        let mut r = IncidentRecord::new("a1", "Strike reported");
        r.published = published.map(str::to_string);
        r.fetched_at = fetched.map(str::to_string);
        r
    }

    #[test]
    fn test_parse_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 2, 10, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2026-03-02T10:30:00+00:00"), Some(expected));
        assert_eq!(parse_timestamp("2026-03-02T10:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-03-02T10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("Mon, 02 Mar 2026 10:30:00 +0000"), Some(expected));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday-ish"), None);
    }

    #[test]
    fn test_elapsed_buckets() {
        assert_eq!(Recency::from_elapsed(Duration::seconds(20)), Recency::JustNow);
        assert_eq!(Recency::from_elapsed(Duration::minutes(5)), Recency::Minutes(5));
        assert_eq!(Recency::from_elapsed(Duration::minutes(125)), Recency::Hours(2));
        assert_eq!(Recency::from_elapsed(Duration::hours(50)), Recency::Days(2));
        assert_eq!(Recency::Minutes(5).label(), "5m ago");
        assert_eq!(Recency::Unknown.label(), "unknown time");
    }

    #[test]
    fn test_future_published_uses_fetched_at() {
        let r = record(Some("2026-03-02T15:00:00Z"), Some("2026-03-02T11:00:00Z"));
        assert_eq!(recency_of(&r, now()), Recency::Hours(1));
    }

    #[test]
    fn test_future_published_without_fetch_is_just_now() {
        let r = record(Some("2026-03-02T15:00:00Z"), None);
        assert_eq!(recency_of(&r, now()), Recency::JustNow);
    }

    #[test]
    fn test_unparsable_is_unknown() {
        assert_eq!(recency_of(&record(Some("n/a"), None), now()), Recency::Unknown);
        assert_eq!(recency_of(&record(None, Some("2026-03-02T11:00:00Z")), now()), Recency::Unknown);
    }
}
