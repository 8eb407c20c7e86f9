use axum::{
    response::sse::{Event, KeepAlive, Sse},
    extract::State,
};
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::BroadcastStream;

use crate::api::AppState;

/// Tells an open page that its last frame is stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SseEvent {
    BoardChanged { intent: String },
    DragChanged { column_id: Option<String> },
}

pub fn publish(tx: &broadcast::Sender<String>, event: &SseEvent) {
    if let Ok(payload) = serde_json::to_string(event) {
        // No subscribers is fine.
        let _ = tx.send(payload);
    }
}

pub async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.sse_tx.subscribe();
    let stream = BroadcastStream::new(rx);

    let event_stream = stream
        .filter_map(|result| match result {
            Ok(event_json) => Some(Ok(Event::default().data(event_json))),
            Err(_) => None, // Skip lagged messages
        });

    Sse::new(event_stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
