use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::dto::{
    CreateColumnRequest, IntentResponse, MoveColumnRequest, RenameColumnRequest,
    SelectColumnRequest,
};
use crate::api::handlers::apply_intent;
use crate::api::AppState;
use crate::domain::{Intent, KanbanError};

pub async fn create_column(
    State(state): State<AppState>,
    body: Option<Json<CreateColumnRequest>>,
) -> Result<(StatusCode, Json<IntentResponse>), KanbanError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let response = apply_intent(&state, Intent::AddColumn { name: req.name }).await?;
    Ok((StatusCode::CREATED, response))
}

pub async fn rename_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RenameColumnRequest>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(
        &state,
        Intent::RenameColumn {
            column_id: id,
            name: req.name,
        },
    )
    .await
}

pub async fn move_column(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveColumnRequest>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(
        &state,
        Intent::MoveColumn {
            dragged_column_id: id,
            target_column_id: req.target_column_id,
        },
    )
    .await
}

pub async fn set_column_selected(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SelectColumnRequest>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(
        &state,
        Intent::SetColumnSelected {
            column_id: id,
            selected: req.selected,
        },
    )
    .await
}

pub async fn toggle_column_collapsed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::ToggleColumnCollapsed { column_id: id }).await
}
