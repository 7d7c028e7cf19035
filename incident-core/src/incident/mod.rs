//! Incident Module
//!
//! Normalized incident record (article + optional classification +
//! optional coordinates) and the small display helpers that hang off it.
//!
//! ## Structure
//! - `types`: IncidentId, Severity, LatLng, Classification, IncidentRecord
//! - `recency`: "5m ago" labels with the clock-skew guard

pub mod types;
pub mod recency;

pub use types::{Classification, IncidentId, IncidentRecord, LatLng, Severity};
pub use recency::{parse_timestamp, recency_of, Recency};

/// Human label for a category tag (`drone_strike` -> `drone strike`)
pub fn category_label(category: &str) -> String {
    category.replace('_', " ")
}

/// Icon shown next to a category on list cards
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "airstrike" | "us_strike_on_iran" | "iran_strike_on_us" => "💥",
        "missile_attack" | "ballistic_missile" => "🚀",
        "drone_strike" => "🛩️",
        "ground_operation" | "hezbollah_action" | "proxy_operation" | "irgc_action" => "⚔️",
        "naval_incident" | "houthi_attack" => "🚢",
        "cyber_attack" => "💻",
        "nuclear_development" => "☢️",
        "threat_statement" => "⚠️",
        "escalation" => "📈",
        "military_deployment" => "🎯",
        "ceasefire_violation" => "🏳️",
        "sanctions" => "🚫",
        _ => "📋",
    }
}
