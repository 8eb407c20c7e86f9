use serde::{Deserialize, Serialize};

use super::Card;

pub const NEW_STAGE_NAME: &str = "New Stage";
pub const NEW_STAGE_COLOR: &str = "gray.50";
pub const NEW_STAGE_BORDER_COLOR: &str = "gray.200";

/// A pipeline stage holding an ordered run of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub name: String,
    pub color: String,
    pub border_color: String,
    pub cards: Vec<Card>,
    /// Derived from the cards; see `services::selection`.
    #[serde(default)]
    pub selected: bool,
}

impl Column {
    pub fn empty(id: String, name: String) -> Self {
        Self {
            id,
            name,
            color: NEW_STAGE_COLOR.into(),
            border_color: NEW_STAGE_BORDER_COLOR.into(),
            cards: Vec::new(),
            selected: false,
        }
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn card_index(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    /// Non-empty and every card selected.
    pub fn all_cards_selected(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.selected)
    }
}
