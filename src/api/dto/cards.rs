use serde::{Deserialize, Serialize};

use crate::domain::{Card, Intent};

#[derive(Debug, Deserialize)]
pub struct MoveCardRequest {
    pub from_column_id: String,
    pub to_column_id: String,
}

impl MoveCardRequest {
    pub fn into_intent(self, card_id: String) -> Intent {
        Intent::MoveCard {
            card_id,
            from_column_id: self.from_column_id,
            to_column_id: self.to_column_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SelectCardRequest {
    pub column_id: String,
    pub selected: bool,
}

#[derive(Debug, Deserialize)]
pub struct BeginCardDragRequest {
    pub card_id: String,
    pub column_id: String,
}

#[derive(Debug, Serialize)]
pub struct CardResponse {
    pub column_id: String,
    #[serde(flatten)]
    pub card: Card,
}
