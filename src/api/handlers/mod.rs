pub mod board;
pub mod cards;
pub mod columns;
pub mod drag;
pub mod filters;
pub mod sse;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::api::dto::IntentResponse;
use crate::api::handlers::sse::SseEvent;
use crate::api::AppState;
use crate::domain::{Intent, KanbanError};
use crate::services::Dashboard;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Validates and applies one intent under the write lock, then answers with
/// the next frame. Changes are announced on the event stream.
pub(crate) async fn apply_intent(
    state: &AppState,
    intent: Intent,
) -> Result<Json<IntentResponse>, KanbanError> {
    let mut dashboard = state.dashboard.write().await;
    apply_locked(state, &mut dashboard, intent)
}

pub(crate) fn apply_locked(
    state: &AppState,
    dashboard: &mut Dashboard,
    intent: Intent,
) -> Result<Json<IntentResponse>, KanbanError> {
    intent.validate()?;
    let name = intent.name();

    let outcome = dashboard.apply(intent);
    if outcome.changed {
        sse::publish(
            &state.sse_tx,
            &SseEvent::BoardChanged {
                intent: name.to_string(),
            },
        );
    }

    Ok(Json(IntentResponse::new(outcome, dashboard.view())))
}
