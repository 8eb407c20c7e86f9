//! Derived selection flags.
//!
//! A column's `selected` flag always follows its cards bottom-up, except for
//! the bulk assignment in [`assign_all`], which writes the value top-down.

use crate::domain::{Board, Column};

pub fn recompute_column(column: &mut Column) {
    column.selected = column.all_cards_selected();
}

pub fn recompute_board(board: &mut Board) {
    board.columns.iter_mut().for_each(recompute_column);
}

pub fn assign_all(board: &mut Board, value: bool) {
    for column in &mut board.columns {
        column.selected = value;
        for card in &mut column.cards {
            card.selected = value;
        }
    }
}

/// Header checkbox state: at least one card, all of them selected.
pub fn all_selected(board: &Board) -> bool {
    let mut cards = board.cards().peekable();
    cards.peek().is_some() && cards.all(|c| c.selected)
}

pub fn selected_card_ids(board: &Board) -> Vec<String> {
    board
        .cards()
        .filter(|c| c.selected)
        .map(|c| c.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_board;

    #[test]
    fn test_recompute_follows_cards() {
        let mut board = demo_board();
        board.columns[0].cards[0].selected = true;
        recompute_board(&mut board);
        assert!(!board.columns[0].selected);

        board.columns[0].cards[1].selected = true;
        recompute_board(&mut board);
        assert!(board.columns[0].selected);
    }

    #[test]
    fn test_empty_column_is_never_selected() {
        let mut column = Column::empty("new".into(), "New Stage".into());
        column.selected = true;
        recompute_column(&mut column);
        assert!(!column.selected);
    }

    #[test]
    fn test_assign_all_and_aggregate() {
        let mut board = demo_board();
        assert!(!all_selected(&board));

        assign_all(&mut board, true);
        assert!(all_selected(&board));
        assert_eq!(selected_card_ids(&board).len(), board.card_count());

        assign_all(&mut board, false);
        assert!(board.columns.iter().all(|c| !c.selected));
        assert!(selected_card_ids(&board).is_empty());
    }

    #[test]
    fn test_aggregate_on_empty_board() {
        assert!(!all_selected(&Board::default()));
    }
}
