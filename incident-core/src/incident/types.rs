//! Incident Record Types
//!
//! Shape of one classified article as produced by the upstream pipeline.
//! Data structures only; derived views live in `numbering`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{COLOR_HIGH, COLOR_LOW, COLOR_MAJOR, COLOR_MEDIUM, UNKNOWN_LOCATION};

// ============================================================================
// IDENTIFIER
// ============================================================================

/// Permanent internal identifier of an incident.
///
/// Never shown to the end user; the display number is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(pub String);

impl IncidentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IncidentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IncidentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// SEVERITY
// ============================================================================

/// Classifier severity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Direct state engagement, mass casualties
    #[serde(alias = "critical")]
    Major,
    High,
    Medium,
    #[default]
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Major, Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Major => "major",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// Parse an upstream tag. `critical` is an older spelling of `major`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "major" | "critical" => Some(Severity::Major),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Major => COLOR_MAJOR,
            Severity::High => COLOR_HIGH,
            Severity::Medium => COLOR_MEDIUM,
            Severity::Low => COLOR_LOW,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// COORDINATES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Output of the upstream attack classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub is_attack: bool,
    #[serde(default = "default_category", deserialize_with = "category_or_other")]
    pub category: String,
    #[serde(default, deserialize_with = "severity_or_low")]
    pub severity: Severity,
    #[serde(default, deserialize_with = "null_to_default")]
    pub brief: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub parties_involved: Vec<String>,
}

impl Classification {
    /// Location worth showing, `None` for blank or the classifier's "Unknown"
    pub fn known_location(&self) -> Option<&str> {
        let loc = self.location.trim();
        if loc.is_empty() || loc == UNKNOWN_LOCATION {
            None
        } else {
            Some(loc)
        }
    }
}

fn default_category() -> String {
    "other".to_string()
}

fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn category_or_other<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|c| !c.trim().is_empty()).unwrap_or_else(default_category))
}

fn severity_or_low<'de, D>(deserializer: D) -> Result<Severity, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw {
        Some(tag) => Severity::from_tag(&tag).unwrap_or_else(|| {
            log::warn!("Unknown severity tag '{}', treating as low", tag);
            Severity::Low
        }),
        None => Severity::Low,
    })
}

// ============================================================================
// INCIDENT RECORD
// ============================================================================

/// One classified article.
///
/// `lat`/`lng` mirror the upstream JSON; use [`IncidentRecord::coordinates`]
/// which only yields a point when both halves are present and valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub id: IncidentId,
    #[serde(default, deserialize_with = "null_to_default")]
    pub title_original: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub summary_en: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Publication time as emitted upstream (ISO-8601 or RFC 2822)
    #[serde(default)]
    pub published: Option<String>,
    /// Fetch time, fallback when `published` is ahead of the clock
    #[serde(default)]
    pub fetched_at: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub classification: Option<Classification>,
}

impl IncidentRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: IncidentId::new(id),
            title_original: title.into(),
            title_en: None,
            summary_en: None,
            url: None,
            source_name: None,
            region: None,
            published: None,
            fetched_at: None,
            lat: None,
            lng: None,
            classification: None,
        }
    }

    pub fn coordinates(&self) -> Option<LatLng> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)).filter(LatLng::is_valid),
            _ => None,
        }
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Only a positive classification counts as an attack
    pub fn is_attack(&self) -> bool {
        self.classification.as_ref().map_or(false, |c| c.is_attack)
    }

    pub fn severity(&self) -> Option<Severity> {
        self.classification.as_ref().map(|c| c.severity)
    }

    /// English headline, falling back to the original-language title
    pub fn headline(&self) -> &str {
        match self.title_en.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => &self.title_original,
        }
    }

    /// Drop coordinates that are half-present or out of range.
    ///
    /// Hosts call this once at load time so both halves are either set or
    /// absent everywhere downstream.
    pub fn sanitized(mut self) -> Self {
        let keep = self.coordinates().is_some();
        if !keep && (self.lat.is_some() || self.lng.is_some()) {
            log::warn!(
                "Incident {} has unusable coordinates ({:?}, {:?}), dropping them",
                self.id,
                self.lat,
                self.lng
            );
            self.lat = None;
            self.lng = None;
        }
        self
    }
}
