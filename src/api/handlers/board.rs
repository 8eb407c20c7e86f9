use axum::{extract::State, Json};

use crate::api::dto::{IntentResponse, SelectAllRequest, SortRequest};
use crate::api::handlers::apply_intent;
use crate::api::AppState;
use crate::domain::{Intent, KanbanError, SortOrder};
use crate::services::BoardView;

pub async fn get_board(State(state): State<AppState>) -> Json<BoardView> {
    let dashboard = state.dashboard.read().await;
    Json(dashboard.view())
}

/// Generic entry point: any intent as tagged JSON.
pub async fn post_intent(
    State(state): State<AppState>,
    Json(intent): Json<Intent>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, intent).await
}

pub async fn set_all_selected(
    State(state): State<AppState>,
    Json(req): Json<SelectAllRequest>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(
        &state,
        Intent::SetAllSelected {
            selected: req.selected,
        },
    )
    .await
}

pub async fn toggle_collapse_all(
    State(state): State<AppState>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::ToggleCollapseAll).await
}

pub async fn set_sort(
    State(state): State<AppState>,
    Json(req): Json<SortRequest>,
) -> Result<Json<IntentResponse>, KanbanError> {
    let sort = req
        .sort
        .parse::<SortOrder>()
        .map_err(KanbanError::BadRequest)?;

    apply_intent(&state, Intent::SetSort { sort }).await
}
