//! Threat Module
//!
//! Read-only threat snapshot (24h / 6h / 48h windows, trend, history)
//! and its display derivation.
//!
//! ## Structure
//! - `types`: ThreatWindow, ThreatBundle, Trend, HistoryPoint
//! - `display`: trend glyphs, bucket colors, sparkline

pub mod types;
pub mod display;


pub use types::{HistoryPoint, ThreatBundle, ThreatWindow, Trend};
pub use display::{
    level_color, score_color, sparkline, trend_indicator, Sparkline, ThreatDisplay, TrendIndicator,
};
