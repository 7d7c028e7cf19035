//! Configuration module

use std::env;
use std::path::PathBuf;

use incident_core::{LatLng, MapSettings, Viewport};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the pipeline's flat files
    pub data_dir: PathBuf,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Map behaviour handed to every dashboard session
    pub map: MapSettings,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = MapSettings::default();
        let initial = defaults.initial_viewport;

        let center = LatLng::new(
            env_parse("MAP_DEFAULT_LAT").unwrap_or(initial.center.lat),
            env_parse("MAP_DEFAULT_LNG").unwrap_or(initial.center.lng),
        );
        let zoom = env_parse("MAP_DEFAULT_ZOOM").unwrap_or(initial.zoom);
        let initial_viewport = Viewport::new(center, zoom).unwrap_or_else(|e| {
            tracing::warn!("Ignoring map viewport from environment: {}", e);
            initial
        });

        let map = MapSettings {
            initial_viewport,
            focus_zoom: env_parse("MAP_FOCUS_ZOOM").unwrap_or(defaults.focus_zoom),
            fly_duration_ms: env_parse("MAP_FLY_DURATION_MS").unwrap_or(defaults.fly_duration_ms),
        }
        .sanitized();

        Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),

            port: env_parse("PORT").unwrap_or(8080),

            environment: environment(),

            map,
        }
    }
}

/// `ENVIRONMENT`, readable before the rest of the config (logging needs it)
pub fn environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// Check if running in production
pub fn is_production(environment: &str) -> bool {
    environment == "production"
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
