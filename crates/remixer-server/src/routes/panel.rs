use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use remixer_panel::action::Action;
use remixer_panel::state::PanelState;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn get_panel(State(state): State<AppState>) -> Json<PanelState> {
    Json(state.controller.snapshot().await)
}

/// Runs the action to completion, including any network calls it
/// triggers, and returns the resulting state.
pub async fn dispatch_action(
    State(state): State<AppState>,
    action: Result<Json<Action>, JsonRejection>,
) -> Result<Json<PanelState>, ApiError> {
    let Json(action) = action?;
    Ok(Json(state.controller.dispatch(action).await))
}
