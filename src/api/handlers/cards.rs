use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::{CardResponse, IntentResponse, MoveCardRequest, SelectCardRequest};
use crate::api::handlers::apply_intent;
use crate::api::AppState;
use crate::domain::{Intent, KanbanError};

pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CardResponse>, KanbanError> {
    let dashboard = state.dashboard.read().await;
    let board = dashboard.board();

    let (ci, index) = board
        .locate_card(&id)
        .ok_or_else(|| KanbanError::NotFound(format!("Card not found: {}", id)))?;

    let column = &board.columns[ci];
    Ok(Json(CardResponse {
        column_id: column.id.clone(),
        card: column.cards[index].clone(),
    }))
}

pub async fn move_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<MoveCardRequest>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, req.into_intent(id)).await
}

pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::DeleteCard { card_id: id }).await
}

pub async fn duplicate_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::DuplicateCard { card_id: id }).await
}

pub async fn set_card_selected(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SelectCardRequest>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(
        &state,
        Intent::SetCardSelected {
            column_id: req.column_id,
            card_id: id,
            selected: req.selected,
        },
    )
    .await
}

pub async fn toggle_card_expanded(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::ToggleCardExpanded { card_id: id }).await
}

pub async fn open_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::OpenCard { card_id: id }).await
}

pub async fn close_card(
    State(state): State<AppState>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::CloseCard).await
}
