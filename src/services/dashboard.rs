use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::{Board, Card, Intent, SortOrder};
use crate::services::board_store::BoardStore;
use crate::services::drag::DragTracker;
use crate::services::filter::TagFilter;
use crate::services::search::{ScrollTarget, SearchState};
use crate::services::selection;
use crate::services::view::{BoardView, CardView, ColumnView};

/// Result of applying one intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntentOutcome {
    pub changed: bool,
    pub scroll_to: Option<ScrollTarget>,
}

impl IntentOutcome {
    fn with_change(changed: bool) -> Self {
        Self {
            changed,
            scroll_to: None,
        }
    }
}

/// The board plus every view control around it. Intents are applied one at
/// a time and each runs to completion.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    store: BoardStore,
    tags: TagFilter,
    search: SearchState,
    sort: SortOrder,
    all_collapsed: bool,
    collapsed_columns: BTreeSet<String>,
    open_card_id: Option<String>,
    drag: DragTracker,
}

impl Dashboard {
    pub fn new(board: Board) -> Self {
        Self {
            store: BoardStore::new(board),
            ..Self::default()
        }
    }

    pub fn board(&self) -> &Board {
        self.store.board()
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.board().card(card_id)
    }

    pub fn tags(&self) -> &TagFilter {
        &self.tags
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    /// Applies one intent. When it reshapes the board, an executed search is
    /// re-run so matches never point at moved or deleted items.
    pub fn apply(&mut self, intent: Intent) -> IntentOutcome {
        tracing::debug!(intent = intent.name(), "Applying intent");

        let reshapes_board = intent.reshapes_board();
        let outcome = self.dispatch(intent);
        if outcome.changed && reshapes_board && self.search.refresh(self.store.board()) {
            tracing::debug!(query = self.search.query.as_str(), "Search results refreshed");
        }
        outcome
    }

    fn dispatch(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::MoveCard {
                card_id,
                from_column_id,
                to_column_id,
            } => IntentOutcome::with_change(self.store.move_card(
                &card_id,
                &from_column_id,
                &to_column_id,
            )),
            Intent::MoveColumn {
                dragged_column_id,
                target_column_id,
            } => IntentOutcome::with_change(
                self.store
                    .move_column(&dragged_column_id, &target_column_id),
            ),
            Intent::AddColumn { name } => {
                let column_id = self.store.add_column(name.as_deref());
                IntentOutcome {
                    changed: true,
                    scroll_to: Some(ScrollTarget::Column { column_id }),
                }
            }
            Intent::RenameColumn { column_id, name } => {
                IntentOutcome::with_change(self.store.rename_column(&column_id, &name))
            }
            Intent::DeleteCard { card_id } => {
                let deleted = self.store.delete_card(&card_id);
                if deleted && self.open_card_id.as_deref() == Some(card_id.as_str()) {
                    self.open_card_id = None;
                }
                IntentOutcome::with_change(deleted)
            }
            Intent::DuplicateCard { card_id } => {
                IntentOutcome::with_change(self.store.duplicate_card(&card_id).is_some())
            }
            Intent::ToggleCardExpanded { card_id } => {
                IntentOutcome::with_change(self.store.toggle_card_expanded(&card_id))
            }
            Intent::SetCardSelected {
                column_id,
                card_id,
                selected,
            } => IntentOutcome::with_change(self.store.set_card_selected(
                &column_id, &card_id, selected,
            )),
            Intent::SetColumnSelected {
                column_id,
                selected,
            } => IntentOutcome::with_change(self.store.set_column_selected(&column_id, selected)),
            Intent::SetAllSelected { selected } => {
                IntentOutcome::with_change(self.store.set_all_selected(selected))
            }
            Intent::ToggleTag { tag } => {
                self.tags.toggle(tag.trim());
                IntentOutcome::with_change(true)
            }
            Intent::ClearTags => IntentOutcome::with_change(self.tags.clear()),
            Intent::SetSearchQuery { query } => {
                IntentOutcome::with_change(self.search.set_query(&query))
            }
            Intent::ExecuteSearch => {
                let scroll_to = self.search.execute(self.store.board());
                IntentOutcome {
                    changed: true,
                    scroll_to,
                }
            }
            Intent::ClearSearch => IntentOutcome::with_change(self.search.clear()),
            Intent::SetSort { sort } => {
                let changed = self.sort != sort;
                self.sort = sort;
                IntentOutcome::with_change(changed)
            }
            Intent::ToggleCollapseAll => {
                self.all_collapsed = !self.all_collapsed;
                if self.all_collapsed {
                    self.collapsed_columns.clear();
                }
                IntentOutcome::with_change(true)
            }
            Intent::ToggleColumnCollapsed { column_id } => {
                IntentOutcome::with_change(self.toggle_column_collapsed(&column_id))
            }
            Intent::OpenCard { card_id } => {
                if !self.board().has_card(&card_id) {
                    tracing::debug!(card_id = card_id.as_str(), "Card not found, drawer stays closed");
                    return IntentOutcome::default();
                }
                self.open_card_id = Some(card_id);
                IntentOutcome::with_change(true)
            }
            Intent::CloseCard => IntentOutcome::with_change(self.open_card_id.take().is_some()),
        }
    }

    pub fn begin_card_drag(&mut self, card_id: &str, column_id: &str) -> bool {
        let owned = self
            .board()
            .column(column_id)
            .is_some_and(|c| c.card_index(card_id).is_some());
        if owned {
            self.drag.begin_card_drag(card_id, column_id);
        }
        owned
    }

    pub fn begin_column_drag(&mut self, column_id: &str) -> bool {
        let exists = self.board().has_column(column_id);
        if exists {
            self.drag.begin_column_drag(column_id);
        }
        exists
    }

    pub fn end_drag(&mut self) {
        self.drag.end_drag();
    }

    /// Ends the active drag and turns it into the move it stands for.
    pub fn resolve_drop(&mut self, column_id: &str) -> Option<Intent> {
        self.drag.drop_on(column_id)
    }

    /// Resolves the active drag against `column_id` and applies the move.
    pub fn drop_on(&mut self, column_id: &str) -> IntentOutcome {
        match self.resolve_drop(column_id) {
            Some(intent) => self.apply(intent),
            None => IntentOutcome::default(),
        }
    }

    pub fn is_column_collapsed(&self, column_id: &str) -> bool {
        self.all_collapsed || self.collapsed_columns.contains(column_id)
    }

    // Local toggles are ignored while everything is collapsed.
    fn toggle_column_collapsed(&mut self, column_id: &str) -> bool {
        if self.all_collapsed || !self.board().has_column(column_id) {
            return false;
        }
        if !self.collapsed_columns.remove(column_id) {
            self.collapsed_columns.insert(column_id.to_string());
        }
        true
    }

    pub fn view(&self) -> BoardView {
        let board = self.store.board();
        let results = &self.search.results;

        let columns = board
            .columns
            .iter()
            .map(|column| {
                let mut cards = self.tags.visible_cards(column);
                self.sort.sort(&mut cards);
                let cards = cards
                    .into_iter()
                    .map(|card| CardView::from_card(card, results.is_site_highlighted(&card.id)))
                    .collect();

                ColumnView {
                    collapsed: self.is_column_collapsed(&column.id),
                    highlighted: results.is_stage_highlighted(&column.id),
                    can_drop: self.drag.can_drop_card_on(&column.id),
                    ..ColumnView::new(column, cards)
                }
            })
            .collect();

        BoardView {
            columns,
            active_tags: self.tags.active().to_vec(),
            search_query: self.search.query.clone(),
            search_matches: results.matches.clone(),
            sort: self.sort,
            all_collapsed: self.all_collapsed,
            all_selected: selection::all_selected(board),
            selected_card_ids: selection::selected_card_ids(board),
            open_card: self
                .open_card_id
                .as_deref()
                .and_then(|id| board.card(id))
                .cloned(),
            dragging: self.drag.active().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_board;
    use crate::services::search::SearchMatch;

    fn dashboard() -> Dashboard {
        Dashboard::new(demo_board())
    }

    fn view_ids(view: &BoardView, column_id: &str) -> Vec<String> {
        view.column(column_id)
            .map(|c| c.cards.iter().map(|card| card.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_add_column_scrolls_to_new_stage() {
        let mut dash = dashboard();
        let outcome = dash.apply(Intent::AddColumn { name: None });
        let last = dash.board().columns.last().unwrap().id.clone();

        assert!(outcome.changed);
        assert_eq!(outcome.scroll_to, Some(ScrollTarget::Column { column_id: last }));
    }

    #[test]
    fn test_view_counts_reflect_tag_filter() {
        let mut dash = dashboard();
        dash.apply(Intent::ToggleTag {
            tag: "commercial".into(),
        });

        let view = dash.view();
        assert_eq!(view.column("nielsen").unwrap().count, 1);
        assert_eq!(view.column("closed").unwrap().count, 0);
        assert_eq!(view.active_tags, ["commercial"]);
        assert_eq!(dash.tags().active(), ["commercial"]);
        // Underlying board untouched.
        assert_eq!(dash.board().column("nielsen").unwrap().count(), 2);

        dash.apply(Intent::ToggleTag {
            tag: "commercial".into(),
        });
        assert_eq!(dash.view().column("nielsen").unwrap().count, 2);
    }

    #[test]
    fn test_search_is_independent_of_tags() {
        let mut dash = dashboard();
        dash.apply(Intent::ToggleTag {
            tag: "industrial".into(),
        });
        dash.apply(Intent::SetSearchQuery {
            query: "tenth".into(),
        });
        let outcome = dash.apply(Intent::ExecuteSearch);

        // The match is hidden by the tag filter but still found.
        assert_eq!(
            outcome.scroll_to,
            Some(ScrollTarget::Card {
                column_id: "nielsen".into(),
                card_id: "1".into(),
            })
        );

        dash.apply(Intent::ClearSearch);
        let view = dash.view();
        assert!(view.search_matches.is_empty());
        assert_eq!(view.active_tags, ["industrial"]);
    }

    #[test]
    fn test_highlights_in_view() {
        let mut dash = dashboard();
        dash.apply(Intent::SetSearchQuery {
            query: "closed".into(),
        });
        dash.apply(Intent::ExecuteSearch);

        let view = dash.view();
        assert!(view.column("closed").unwrap().highlighted);
        assert!(!view.column("nielsen").unwrap().highlighted);
        assert!(view.columns.iter().flat_map(|c| &c.cards).all(|c| !c.highlighted));
    }

    #[test]
    fn test_sort_orders_view_only() {
        let mut dash = dashboard();
        dash.apply(Intent::MoveCard {
            card_id: "3".into(),
            from_column_id: "westinghouse".into(),
            to_column_id: "nielsen".into(),
        });
        assert_eq!(view_ids(&dash.view(), "nielsen"), ["1", "2", "3"]);

        dash.apply(Intent::SetSort {
            sort: SortOrder::Newest,
        });
        assert_eq!(view_ids(&dash.view(), "nielsen"), ["3", "2", "1"]);

        dash.apply(Intent::SetSort {
            sort: SortOrder::AlphaAsc,
        });
        // 123 Tenth, 456 Park, 789 Broadway
        assert_eq!(view_ids(&dash.view(), "nielsen"), ["1", "2", "3"]);

        let board_order: Vec<&str> = dash.board().columns[0]
            .cards
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(board_order, ["1", "2", "3"]);
    }

    #[test]
    fn test_collapse_rules() {
        let mut dash = dashboard();
        assert!(dash.apply(Intent::ToggleColumnCollapsed {
            column_id: "nielsen".into(),
        })
        .changed);
        assert!(dash.is_column_collapsed("nielsen"));
        assert!(!dash.is_column_collapsed("closed"));

        dash.apply(Intent::ToggleCollapseAll);
        assert!(dash.view().columns.iter().all(|c| c.collapsed));
        assert!(!dash
            .apply(Intent::ToggleColumnCollapsed {
                column_id: "closed".into(),
            })
            .changed);

        // Expanding globally forgets earlier local collapses.
        dash.apply(Intent::ToggleCollapseAll);
        assert!(dash.view().columns.iter().all(|c| !c.collapsed));
    }

    #[test]
    fn test_drawer_open_close_and_delete() {
        let mut dash = dashboard();
        assert!(!dash.apply(Intent::OpenCard { card_id: "nope".into() }).changed);
        assert!(dash.view().open_card.is_none());

        dash.apply(Intent::OpenCard { card_id: "4".into() });
        assert_eq!(dash.view().open_card.map(|c| c.id), Some("4".to_string()));

        dash.apply(Intent::DeleteCard { card_id: "4".into() });
        assert!(dash.view().open_card.is_none());

        dash.apply(Intent::OpenCard { card_id: "5".into() });
        assert!(dash.apply(Intent::CloseCard).changed);
        assert!(!dash.apply(Intent::CloseCard).changed);
    }

    #[test]
    fn test_drag_and_drop_flow() {
        let mut dash = dashboard();
        assert!(!dash.begin_card_drag("1", "closed"));
        assert!(dash.drag().active().is_none());
        assert!(dash.begin_card_drag("1", "nielsen"));
        assert!(dash.drag().can_drop_card_on("closed"));

        let view = dash.view();
        assert!(!view.column("nielsen").unwrap().can_drop);
        assert!(view.column("closed").unwrap().can_drop);

        assert!(dash.drop_on("closed").changed);
        assert_eq!(view_ids(&dash.view(), "closed"), ["5", "1"]);
        assert!(dash.view().dragging.is_none());

        assert!(dash.begin_column_drag("closed"));
        assert!(dash.drop_on("nielsen").changed);
        assert_eq!(dash.board().columns[0].id, "closed");

        assert!(!dash.drop_on("nielsen").changed);
    }

    #[test]
    fn test_selection_aggregate_in_view() {
        let mut dash = dashboard();
        dash.apply(Intent::SetAllSelected { selected: true });
        let view = dash.view();
        assert!(view.all_selected);
        assert_eq!(view.selected_card_ids.len(), 5);

        dash.apply(Intent::SetCardSelected {
            column_id: "closed".into(),
            card_id: "5".into(),
            selected: false,
        });
        let view = dash.view();
        assert!(!view.all_selected);
        assert!(!view.column("closed").unwrap().selected);
        assert!(view.column("nielsen").unwrap().selected);
    }

    #[test]
    fn test_column_selection_intent() {
        let mut dash = dashboard();
        assert!(dash
            .apply(Intent::SetColumnSelected {
                column_id: "nielsen".into(),
                selected: true,
            })
            .changed);

        let view = dash.view();
        assert!(view.column("nielsen").unwrap().selected);
        assert_eq!(view.selected_card_ids, ["1", "2"]);
        assert!(!view.all_selected);

        assert!(!dash
            .apply(Intent::SetColumnSelected {
                column_id: "missing".into(),
                selected: true,
            })
            .changed);
    }

    #[test]
    fn test_search_follows_board_changes() {
        let mut dash = dashboard();
        dash.apply(Intent::SetSearchQuery {
            query: "tenth".into(),
        });
        dash.apply(Intent::ExecuteSearch);

        dash.apply(Intent::MoveCard {
            card_id: "1".into(),
            from_column_id: "nielsen".into(),
            to_column_id: "prospects".into(),
        });
        assert_eq!(
            dash.search().results.matches,
            [SearchMatch::Site {
                column_id: "prospects".into(),
                card_id: "1".into(),
                match_text: "123 Tenth Avenue, Manhattan, NY".into(),
            }]
        );

        dash.apply(Intent::DeleteCard { card_id: "1".into() });
        let view = dash.view();
        assert!(view.search_matches.is_empty());
        assert!(view.columns.iter().flat_map(|c| &c.cards).all(|c| !c.highlighted));
        assert_eq!(view.search_query, "tenth");
    }

    #[test]
    fn test_rename_column_refreshes_stage_matches() {
        let mut dash = dashboard();
        dash.apply(Intent::SetSearchQuery {
            query: "nielsen".into(),
        });
        dash.apply(Intent::ExecuteSearch);
        assert!(dash.search().results.is_stage_highlighted("nielsen"));

        dash.apply(Intent::RenameColumn {
            column_id: "nielsen".into(),
            name: "Leads".into(),
        });
        assert!(dash.search().results.is_empty());
        assert!(!dash.view().column("nielsen").unwrap().highlighted);
    }
}
