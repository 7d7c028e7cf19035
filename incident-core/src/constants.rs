//! Central Display Constants
//!
//! Single source of truth for palette, map defaults and threat buckets.

// ============================================
// Severity palette
// ============================================

/// Marker / badge color for `major` (and upstream `critical`)
pub const COLOR_MAJOR: &str = "#ef4444";
/// Marker / badge color for `high`
pub const COLOR_HIGH: &str = "#f97316";
/// Marker / badge color for `medium`
pub const COLOR_MEDIUM: &str = "#eab308";
/// Marker / badge color for `low`
pub const COLOR_LOW: &str = "#22c55e";

/// Accent for the "all" filter tab
pub const COLOR_ALL: &str = "#6366f1";

// ============================================
// Map defaults
// ============================================

/// Initial map center (lat, lng)
pub const DEFAULT_MAP_CENTER: (f64, f64) = (29.0, 45.0);

/// Initial map zoom
pub const DEFAULT_MAP_ZOOM: f64 = 5.0;

/// Fly-to never leaves the viewport below this zoom
pub const DEFAULT_FOCUS_ZOOM: f64 = 8.0;

/// Fly-to animation duration (milliseconds)
pub const DEFAULT_FLY_DURATION_MS: u32 = 800;

/// Hard cap for fly-to duration
pub const MAX_FLY_DURATION_MS: u32 = 999;

/// Tile-layer zoom range
pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 19.0;

// ============================================
// Markers
// ============================================

/// Marker diameter (px) for numbers up to 99
pub const MARKER_SIZE: u32 = 24;
/// Marker diameter (px) for three-digit numbers
pub const MARKER_SIZE_WIDE: u32 = 28;
/// Extra diameter (px) of the selected marker
pub const MARKER_SELECTED_GROWTH: u32 = 8;

pub const MARKER_OUTLINE: &str = "#ffffff";
pub const MARKER_OUTLINE_SELECTED: &str = "#111827";

// ============================================
// Threat levels (score floor, level, label, color)
// ============================================

pub const THREAT_LEVELS: [(f64, u8, &str, &str); 5] = [
    (30.0, 1, "MAJOR", "#DC2626"),
    (15.0, 2, "HIGH", "#EA580C"),
    (6.0, 3, "ELEVATED", "#CA8A04"),
    (2.0, 4, "GUARDED", "#2563EB"),
    (0.0, 5, "LOW", "#16A34A"),
];

/// Minimum sparkline bar height (percent of the tallest bar)
pub const SPARKLINE_MIN_BAR_PCT: f64 = 8.0;

/// Location label the classifier emits when it has nothing better
pub const UNKNOWN_LOCATION: &str = "Unknown";
