use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::{IntentResponse, SearchQueryRequest};
use crate::api::handlers::apply_intent;
use crate::api::AppState;
use crate::domain::{Intent, KanbanError};

pub async fn toggle_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::ToggleTag { tag }).await
}

pub async fn clear_tags(
    State(state): State<AppState>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::ClearTags).await
}

pub async fn set_search_query(
    State(state): State<AppState>,
    Json(req): Json<SearchQueryRequest>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::SetSearchQuery { query: req.query }).await
}

pub async fn execute_search(
    State(state): State<AppState>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::ExecuteSearch).await
}

pub async fn clear_search(
    State(state): State<AppState>,
) -> Result<Json<IntentResponse>, KanbanError> {
    apply_intent(&state, Intent::ClearSearch).await
}
