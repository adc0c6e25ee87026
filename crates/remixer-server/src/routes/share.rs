use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use remixer_core::models::candidate::CandidateId;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ShareLink {
    pub url: String,
}

pub async fn share_candidate(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ShareLink>, ApiError> {
    let Path(id) = id?;
    let panel = state.controller.snapshot().await;
    let url = panel
        .candidate_share_url(CandidateId(id))
        .ok_or_else(|| ApiError::NotFound(format!("candidate not found: {id}")))?;
    Ok(Json(ShareLink { url }))
}

pub async fn share_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShareLink>, ApiError> {
    let panel = state.controller.snapshot().await;
    let url = panel
        .saved_share_url(&id)
        .ok_or_else(|| ApiError::NotFound(format!("saved tweet not found: {id}")))?;
    Ok(Json(ShareLink { url }))
}
