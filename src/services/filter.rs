use serde::Serialize;

use crate::domain::{Board, Card, Column};

/// Active tag filters, in the order they were switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagFilter {
    active: Vec<String>,
}

impl TagFilter {
    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Adds the tag, or removes it if already active. Returns whether it is
    /// active afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(index) = self.active.iter().position(|t| t == tag) {
            self.active.remove(index);
            false
        } else {
            self.active.push(tag.to_string());
            true
        }
    }

    pub fn clear(&mut self) -> bool {
        let had_any = !self.active.is_empty();
        self.active.clear();
        had_any
    }

    pub fn matches(&self, card: &Card) -> bool {
        card.matches_any_tag(&self.active)
    }

    /// Cards of `column` that pass the filter, in board order.
    pub fn visible_cards<'a>(&self, column: &'a Column) -> Vec<&'a Card> {
        column.cards.iter().filter(|c| self.matches(c)).collect()
    }

    /// Derived copy of the board holding only matching cards. The source
    /// board is never touched.
    pub fn apply(&self, board: &Board) -> Board {
        if self.is_empty() {
            return board.clone();
        }

        Board::new(
            board
                .columns
                .iter()
                .map(|column| Column {
                    cards: self.visible_cards(column).into_iter().cloned().collect(),
                    ..column.clone()
                })
                .collect(),
        )
    }
}
