use uuid::Uuid;

use crate::domain::column::NEW_STAGE_NAME;
use crate::domain::{Board, Card, Column};
use crate::services::selection;

/// Sole writer of the board. Every operation is total: references that no
/// longer resolve (a stale drag, a card deleted in the meantime) leave the
/// board untouched and report `false`.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    board: Board,
}

impl BoardStore {
    pub fn new(mut board: Board) -> Self {
        selection::recompute_board(&mut board);
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_card(&mut self, card_id: &str, from_column_id: &str, to_column_id: &str) -> bool {
        if from_column_id == to_column_id {
            tracing::debug!(card_id, column_id = from_column_id, "Same column, no move needed");
            return false;
        }

        let (Some(from), Some(to)) = (
            self.board.column_index(from_column_id),
            self.board.column_index(to_column_id),
        ) else {
            tracing::debug!(card_id, from_column_id, to_column_id, "Column not found, move ignored");
            return false;
        };

        let Some(index) = self.board.columns[from].card_index(card_id) else {
            tracing::debug!(card_id, from_column_id, "Card not in source column, move ignored");
            return false;
        };

        let card = self.board.columns[from].cards.remove(index);
        self.board.columns[to].cards.push(card);

        selection::recompute_column(&mut self.board.columns[from]);
        selection::recompute_column(&mut self.board.columns[to]);

        tracing::info!(card_id, from_column_id, to_column_id, "Card moved");
        true
    }

    /// The dragged column takes the index the target held before the
    /// dragged one was lifted out, so moving right lands after the target
    /// and moving left lands before it.
    pub fn move_column(&mut self, dragged_column_id: &str, target_column_id: &str) -> bool {
        if dragged_column_id == target_column_id {
            tracing::debug!(column_id = dragged_column_id, "Same column, no reorder needed");
            return false;
        }

        let (Some(dragged), Some(target)) = (
            self.board.column_index(dragged_column_id),
            self.board.column_index(target_column_id),
        ) else {
            tracing::debug!(dragged_column_id, target_column_id, "Column not found, reorder ignored");
            return false;
        };

        let column = self.board.columns.remove(dragged);
        self.board.columns.insert(target, column);

        tracing::info!(dragged_column_id, target_column_id, index = target, "Column reordered");
        true
    }

    pub fn add_column(&mut self, name: Option<&str>) -> String {
        let id = self.fresh_id("new-stage");
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(NEW_STAGE_NAME);

        self.board
            .columns
            .push(Column::empty(id.clone(), name.to_string()));

        tracing::info!(column_id = id.as_str(), name, "Stage added");
        id
    }

    pub fn rename_column(&mut self, column_id: &str, name: &str) -> bool {
        let Some(index) = self.board.column_index(column_id) else {
            tracing::debug!(column_id, "Column not found, rename ignored");
            return false;
        };

        let column = &mut self.board.columns[index];
        let name = name.trim();
        if column.name == name {
            return false;
        }
        column.name = name.to_string();
        true
    }

    pub fn delete_card(&mut self, card_id: &str) -> bool {
        let Some((ci, index)) = self.board.locate_card(card_id) else {
            tracing::debug!(card_id, "Card not found, delete ignored");
            return false;
        };

        let column = &mut self.board.columns[ci];
        column.cards.remove(index);
        selection::recompute_column(column);

        tracing::info!(card_id, column_id = column.id.as_str(), "Card deleted");
        true
    }

    /// Appends a copy to the owning column and returns its id.
    pub fn duplicate_card(&mut self, card_id: &str) -> Option<String> {
        let Some((ci, index)) = self.board.locate_card(card_id) else {
            tracing::debug!(card_id, "Card not found, duplicate ignored");
            return None;
        };

        let new_id = self.fresh_id(&format!("{}-copy", card_id));
        let copy = self.board.columns[ci].cards[index].duplicate_as(new_id.clone());

        let column = &mut self.board.columns[ci];
        column.cards.push(copy);
        selection::recompute_column(column);

        tracing::info!(card_id, new_card_id = new_id.as_str(), "Card duplicated");
        Some(new_id)
    }

    pub fn toggle_card_expanded(&mut self, card_id: &str) -> bool {
        match self.card_mut(card_id) {
            Some(card) => {
                card.expanded = !card.expanded;
                true
            }
            None => {
                tracing::debug!(card_id, "Card not found, expand ignored");
                false
            }
        }
    }

    pub fn set_card_selected(&mut self, column_id: &str, card_id: &str, value: bool) -> bool {
        let Some(ci) = self.board.column_index(column_id) else {
            tracing::debug!(column_id, card_id, "Column not found, selection ignored");
            return false;
        };

        let column = &mut self.board.columns[ci];
        let Some(index) = column.card_index(card_id) else {
            tracing::debug!(column_id, card_id, "Card not in column, selection ignored");
            return false;
        };

        column.cards[index].selected = value;
        selection::recompute_column(column);
        true
    }

    /// Column checkbox: pushes `value` down to every card, then derives the
    /// column flag back from them so an empty column stays unselected.
    pub fn set_column_selected(&mut self, column_id: &str, value: bool) -> bool {
        let Some(ci) = self.board.column_index(column_id) else {
            tracing::debug!(column_id, "Column not found, selection ignored");
            return false;
        };

        let column = &mut self.board.columns[ci];
        for card in &mut column.cards {
            card.selected = value;
        }
        selection::recompute_column(column);

        tracing::debug!(column_id, selected = value, cards = column.count(), "Column selection set");
        true
    }

    pub fn set_all_selected(&mut self, value: bool) -> bool {
        selection::assign_all(&mut self.board, value);
        true
    }

    fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        let (ci, index) = self.board.locate_card(card_id)?;
        Some(&mut self.board.columns[ci].cards[index])
    }

    fn fresh_id(&self, prefix: &str) -> String {
        loop {
            let suffix = Uuid::new_v4().simple().to_string();
            let id = format!("{}-{}", prefix, &suffix[..12]);
            if !self.board.has_column(&id) && !self.board.has_card(&id) {
                return id;
            }
        }
    }
}
