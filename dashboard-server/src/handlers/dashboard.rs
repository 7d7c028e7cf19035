//! Dashboard handlers
//!
//! Each call rebuilds the dashboard from the client's snapshot, applies at
//! most one event, and hands back the next snapshot with a fresh frame.

use axum::{extract::State, Json};
use chrono::Utc;
use validator::Validate;

use incident_core::{Dashboard, DashboardState};

use crate::{AppState, AppResult};
use crate::models::{EventRequest, EventResponse, ViewRequest, ViewResponse};

fn restore(state: &AppState, session: DashboardState) -> Dashboard {
    let snapshot = state.store.snapshot();
    Dashboard::restore(snapshot.attacks.clone(), state.config.map, session)
}

/// Render the current session without changing it
pub async fn view(
    State(state): State<AppState>,
    Json(req): Json<ViewRequest>,
) -> AppResult<Json<ViewResponse>> {
    let dashboard = restore(&state, req.state);

    Ok(Json(ViewResponse {
        state: dashboard.snapshot(),
        frame: dashboard.render(Utc::now()),
    }))
}

/// Apply one user interaction
pub async fn event(
    State(state): State<AppState>,
    Json(req): Json<EventRequest>,
) -> AppResult<Json<EventResponse>> {
    req.validate()?;
    let event = req.to_event()?;

    let mut dashboard = restore(&state, req.state);
    let transition = dashboard.dispatch(event);

    tracing::debug!(
        "Dashboard {:?}: {:?} -> {:?} ({} effects)",
        req.action,
        transition.previous,
        transition.selection,
        transition.effects.len()
    );

    Ok(Json(EventResponse {
        state: dashboard.snapshot(),
        outcome: transition.outcome,
        effects: transition.effects,
        frame: dashboard.render(Utc::now()),
    }))
}
