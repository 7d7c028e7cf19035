//! Attack Monitor Dashboard Server
//!
//! Serves numbered incidents, the threat snapshot and briefing files, and
//! runs dashboard interactions through `incident-core`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  ATTACK MONITOR DASHBOARD                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   DashboardState   ┌──────────────────────┐  │
//! │  │  Client   │ ◄────────────────► │  API Gateway (Axum)  │  │
//! │  │ (browser) │   frame + effects  └──────────┬───────────┘  │
//! │  └───────────┘                               │              │
//! │                        ┌─────────────────────┴──────┐       │
//! │                        ▼                            ▼       │
//! │                ┌──────────────┐            ┌─────────────┐  │
//! │                │ incident-core│            │  DataStore  │  │
//! │                │  Dashboard   │            │ (flat JSON) │  │
//! │                └──────────────┘            └─────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;
mod models;
mod handlers;
mod error;


use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging; JSON lines in production
    let json = config::is_production(&config::environment());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "dashboard_server=debug,incident_core=info,tower_http=debug".into()))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    // Load configuration
    let config = config::Config::from_env();

    tracing::info!("Attack Monitor Dashboard starting ({})...", config.environment);
    tracing::info!("Data directory: {}", config.data_dir.display());

    // Load flat files; missing data only yields empty views
    let data_dir = config.data_dir.clone();
    let store = tokio::task::spawn_blocking(move || store::DataStore::open(data_dir))
        .await
        .context("Failed to load data files")?;

    // Build application state
    let state = AppState {
        store: Arc::new(store),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<store::DataStore>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let read_routes = Router::new()
        .route("/health", get(handlers::health::check))
        // Incidents
        .route("/api/v1/incidents", get(handlers::incidents::list))
        .route("/api/v1/incidents/counts", get(handlers::incidents::counts))
        // Threat & briefings
        .route("/api/v1/threat", get(handlers::threat::current))
        .route("/api/v1/summary", get(handlers::summary::latest))
        .route("/api/v1/archive", get(handlers::summary::archive))
        // Regional feeds
        .route("/api/v1/feeds", get(handlers::feeds::list))
        .route("/api/v1/feeds/:region", get(handlers::feeds::region));

    let dashboard_routes = Router::new()
        .route("/api/v1/dashboard/view", post(handlers::dashboard::view))
        .route("/api/v1/dashboard/events", post(handlers::dashboard::event))
        .route("/api/v1/data/reload", post(handlers::data::reload));

    Router::new()
        .merge(read_routes)
        .merge(dashboard_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
