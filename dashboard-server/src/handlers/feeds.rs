//! Regional feed handlers

use axum::{extract::{State, Path}, Json};
use serde::Serialize;

use incident_core::IncidentRecord;

use crate::{AppState, AppResult, AppError};

#[derive(Debug, Serialize)]
pub struct FeedSummary {
    pub region: String,
    pub articles: usize,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<FeedSummary>> {
    let feeds = state
        .store
        .snapshot()
        .feeds
        .iter()
        .map(|(region, articles)| FeedSummary {
            region: region.clone(),
            articles: articles.len(),
        })
        .collect();
    Json(feeds)
}

pub async fn region(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> AppResult<Json<Vec<IncidentRecord>>> {
    state
        .store
        .snapshot()
        .feeds
        .get(&region)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown region: {}", region)))
}
