use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::{BeginCardDragRequest, IntentResponse};
use crate::api::handlers::sse::{self, SseEvent};
use crate::api::handlers::apply_locked;
use crate::api::AppState;
use crate::domain::KanbanError;
use crate::services::{BoardView, IntentOutcome};

// Drag gestures only touch the tracker; the board changes on drop, through
// the same intent path as every other move.

pub async fn begin_card_drag(
    State(state): State<AppState>,
    Json(req): Json<BeginCardDragRequest>,
) -> Result<Json<BoardView>, KanbanError> {
    let mut dashboard = state.dashboard.write().await;
    if !dashboard.begin_card_drag(&req.card_id, &req.column_id) {
        return Err(KanbanError::NotFound(format!(
            "Card {} not found in column {}",
            req.card_id, req.column_id
        )));
    }

    sse::publish(
        &state.sse_tx,
        &SseEvent::DragChanged {
            column_id: Some(req.column_id),
        },
    );
    Ok(Json(dashboard.view()))
}

pub async fn begin_column_drag(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BoardView>, KanbanError> {
    let mut dashboard = state.dashboard.write().await;
    if !dashboard.begin_column_drag(&id) {
        return Err(KanbanError::NotFound(format!("Column not found: {}", id)));
    }

    sse::publish(&state.sse_tx, &SseEvent::DragChanged { column_id: Some(id) });
    Ok(Json(dashboard.view()))
}

pub async fn end_drag(State(state): State<AppState>) -> Json<BoardView> {
    let mut dashboard = state.dashboard.write().await;
    dashboard.end_drag();
    sse::publish(&state.sse_tx, &SseEvent::DragChanged { column_id: None });
    Json(dashboard.view())
}

/// Drop on a column. Resolves to a card or column move, or to nothing when
/// dropped back on its source.
pub async fn drop_on(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IntentResponse>, KanbanError> {
    let mut dashboard = state.dashboard.write().await;

    match dashboard.resolve_drop(&id) {
        Some(intent) => apply_locked(&state, &mut dashboard, intent),
        None => {
            sse::publish(&state.sse_tx, &SseEvent::DragChanged { column_id: None });
            Ok(Json(IntentResponse::new(
                IntentOutcome::default(),
                dashboard.view(),
            )))
        }
    }
}
