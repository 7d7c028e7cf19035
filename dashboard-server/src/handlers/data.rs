//! Data reload handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppState, AppResult, AppError};

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub incidents: usize,
    pub feeds: usize,
    pub has_threat: bool,
    pub has_summary: bool,
    pub loaded_at: Option<String>,
}

/// Re-read the flat files off the async runtime
pub async fn reload(State(state): State<AppState>) -> AppResult<Json<ReloadResponse>> {
    let store = state.store.clone();
    let snapshot = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|e| AppError::InternalError(format!("reload task failed: {}", e)))?;

    tracing::info!("Data reloaded from {}", state.store.data_dir().display());

    Ok(Json(ReloadResponse {
        incidents: snapshot.attacks.len(),
        feeds: snapshot.feeds.len(),
        has_threat: snapshot.threat.is_some(),
        has_summary: snapshot.summary.is_some(),
        loaded_at: snapshot.loaded_at.map(|t| t.to_rfc3339()),
    }))
}
