use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use sites_kanban::api::{create_router, AppState};
use sites_kanban::config::Config;
use sites_kanban::seed::demo_board;
use sites_kanban::services::Dashboard;

pub fn test_config(frontend_dir: &str) -> Config {
    Config {
        port: 3000,
        frontend_dir: frontend_dir.to_string(),
        cors_origin: "http://localhost:5173".to_string(),
        seed_demo_data: true,
        event_buffer: 16,
    }
}

pub fn setup_app() -> (Router, AppState) {
    setup_app_with_frontend("./no-frontend")
}

pub fn setup_app_with_frontend(frontend_dir: &str) -> (Router, AppState) {
    let (sse_tx, _) = tokio::sync::broadcast::channel(16);
    let config = Arc::new(test_config(frontend_dir));
    let state = AppState::new(Dashboard::new(demo_board()), sse_tx, config.clone());
    let app = create_router(state.clone(), &config);
    (app, state)
}

pub async fn make_request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri).method(method);

    if body.is_some() {
        request = request.header("content-type", "application/json");
    }

    let request = request
        .body(Body::from(body.unwrap_or_default()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    (status, body_str)
}

pub async fn make_json_request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, body) = make_request(app, method, uri, body.map(|b| b.to_string())).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&body).unwrap_or(Value::String(body))
    };
    (status, value)
}

/// Card ids of one column in a board view, in display order.
pub fn column_card_ids(board: &Value, column_id: &str) -> Vec<String> {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == column_id)
        .map(|c| {
            c["cards"]
                .as_array()
                .unwrap()
                .iter()
                .map(|card| card["id"].as_str().unwrap().to_string())
                .collect()
        })
        .unwrap_or_default()
}

pub fn column_ids(board: &Value) -> Vec<String> {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

pub fn column<'a>(board: &'a Value, column_id: &str) -> &'a Value {
    board["columns"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == column_id)
        .unwrap()
}
