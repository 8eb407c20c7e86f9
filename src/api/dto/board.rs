use serde::{Deserialize, Serialize};

use crate::services::{BoardView, IntentOutcome, ScrollTarget};

#[derive(Debug, Deserialize)]
pub struct SelectAllRequest {
    pub selected: bool,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub sort: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQueryRequest {
    pub query: String,
}

/// Answer to every intent: what happened plus the frame to render next.
#[derive(Debug, Serialize)]
pub struct IntentResponse {
    pub changed: bool,
    pub scroll_to: Option<ScrollTarget>,
    pub board: BoardView,
}

impl IntentResponse {
    pub fn new(outcome: IntentOutcome, board: BoardView) -> Self {
        Self {
            changed: outcome.changed,
            scroll_to: outcome.scroll_to,
            board,
        }
    }
}
