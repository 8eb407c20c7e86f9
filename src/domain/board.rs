use serde::{Deserialize, Serialize};

use super::{Card, Column};

/// Left-to-right ordered stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
}

/// Position of a card: (column index, card index within that column).
pub type CardLocation = (usize, usize);

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn locate_card(&self, card_id: &str) -> Option<CardLocation> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, column)| column.card_index(card_id).map(|i| (ci, i)))
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.locate_card(card_id)
            .map(|(ci, i)| &self.columns[ci].cards[i])
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|c| c.cards.iter())
    }

    pub fn has_column(&self, column_id: &str) -> bool {
        self.column_index(column_id).is_some()
    }

    pub fn has_card(&self, card_id: &str) -> bool {
        self.cards().any(|c| c.id == card_id)
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::count).sum()
    }
}
