//! Executive summary handlers

use axum::{extract::State, Json};

use crate::{AppState, AppResult, AppError};
use crate::models::{ArchiveLink, ExecutiveSummary};

pub async fn latest(State(state): State<AppState>) -> AppResult<Json<ExecutiveSummary>> {
    state
        .store
        .snapshot()
        .summary
        .clone()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No executive summary available".to_string()))
}

/// Past briefings, newest first as listed in the index
pub async fn archive(State(state): State<AppState>) -> Json<Vec<ArchiveLink>> {
    let links = state
        .store
        .snapshot()
        .archive
        .iter()
        .cloned()
        .map(ArchiveLink::new)
        .collect();
    Json(links)
}
