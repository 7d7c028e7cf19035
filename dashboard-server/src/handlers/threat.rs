//! Threat level handler

use axum::{extract::State, Json};
use serde::Serialize;

use incident_core::ThreatBundle;
use incident_core::threat::ThreatDisplay;

use crate::{AppState, AppResult, AppError};

#[derive(Debug, Serialize)]
pub struct ThreatResponse {
    pub bundle: ThreatBundle,
    pub display: ThreatDisplay,
}

pub async fn current(State(state): State<AppState>) -> AppResult<Json<ThreatResponse>> {
    let snapshot = state.store.snapshot();
    let bundle = snapshot
        .threat
        .clone()
        .ok_or_else(|| AppError::DataUnavailable("threat level not computed yet".to_string()))?;

    Ok(Json(ThreatResponse {
        display: ThreatDisplay::derive(&bundle),
        bundle,
    }))
}
