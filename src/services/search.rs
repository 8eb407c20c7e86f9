use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::Board;

/// One hit, in board traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchMatch {
    Stage {
        column_id: String,
        match_text: String,
    },
    Site {
        column_id: String,
        card_id: String,
        match_text: String,
    },
}

/// What the presentation should bring into view after an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScrollTarget {
    Column { column_id: String },
    Card { column_id: String, card_id: String },
}

impl From<&SearchMatch> for ScrollTarget {
    fn from(m: &SearchMatch) -> Self {
        match m {
            SearchMatch::Stage { column_id, .. } => ScrollTarget::Column {
                column_id: column_id.clone(),
            },
            SearchMatch::Site {
                column_id, card_id, ..
            } => ScrollTarget::Card {
                column_id: column_id.clone(),
                card_id: card_id.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub matches: Vec<SearchMatch>,
    pub highlighted_stages: BTreeSet<String>,
    pub highlighted_sites: BTreeSet<String>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn first(&self) -> Option<&SearchMatch> {
        self.matches.first()
    }

    pub fn scroll_target(&self) -> Option<ScrollTarget> {
        self.first().map(ScrollTarget::from)
    }

    pub fn stage_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| matches!(m, SearchMatch::Stage { .. }))
            .count()
    }

    pub fn site_count(&self) -> usize {
        self.matches.len() - self.stage_count()
    }

    pub fn is_stage_highlighted(&self, column_id: &str) -> bool {
        self.highlighted_stages.contains(column_id)
    }

    pub fn is_site_highlighted(&self, card_id: &str) -> bool {
        self.highlighted_sites.contains(card_id)
    }
}

/// Case-insensitive substring search over stage names and site addresses.
/// A blank query yields no results.
pub fn search(board: &Board, query: &str) -> SearchResults {
    let needle = query.trim().to_lowercase();
    let mut results = SearchResults::default();
    if needle.is_empty() {
        return results;
    }

    for column in &board.columns {
        if column.name.to_lowercase().contains(&needle) {
            results.matches.push(SearchMatch::Stage {
                column_id: column.id.clone(),
                match_text: column.name.clone(),
            });
            results.highlighted_stages.insert(column.id.clone());
        }

        for card in &column.cards {
            if card.primary_label.to_lowercase().contains(&needle) {
                results.matches.push(SearchMatch::Site {
                    column_id: column.id.clone(),
                    card_id: card.id.clone(),
                    match_text: card.primary_label.clone(),
                });
                results.highlighted_sites.insert(card.id.clone());
            }
        }
    }

    results
}

/// Query text plus the results of its last execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub results: SearchResults,
    #[serde(skip)]
    executed: Option<String>,
}

impl SearchState {
    /// Typing only records the text; blank text also drops stale results.
    pub fn set_query(&mut self, query: &str) -> bool {
        let changed = self.query != query;
        self.query = query.to_string();
        if query.trim().is_empty() {
            self.executed = None;
            if !self.results.is_empty() {
                self.results = SearchResults::default();
                return true;
            }
        }
        changed
    }

    pub fn execute(&mut self, board: &Board) -> Option<ScrollTarget> {
        self.results = search(board, &self.query);
        self.executed = Some(self.query.clone()).filter(|q| !q.trim().is_empty());
        tracing::debug!(
            query = self.query.as_str(),
            matches = self.results.matches.len(),
            "Search executed"
        );
        self.results.scroll_target()
    }

    /// Re-runs the last executed query, which may differ from text typed
    /// since. Returns whether the results changed.
    pub fn refresh(&mut self, board: &Board) -> bool {
        let Some(query) = self.executed.as_deref() else {
            return false;
        };
        let results = search(board, query);
        if results == self.results {
            return false;
        }
        self.results = results;
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.query.is_empty() || !self.results.is_empty();
        *self = SearchState::default();
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_board;

    #[test]
    fn test_site_search_example() {
        let results = search(&demo_board(), "tenth");
        assert_eq!(results.site_count(), 1);
        assert_eq!(results.stage_count(), 0);
        assert!(results.is_site_highlighted("1"));
        assert_eq!(
            results.scroll_target(),
            Some(ScrollTarget::Card {
                column_id: "nielsen".into(),
                card_id: "1".into(),
            })
        );
    }

    #[test]
    fn test_stage_search_example() {
        let results = search(&demo_board(), "  NIELSEN ");
        assert_eq!(results.stage_count(), 1);
        assert_eq!(results.site_count(), 0);
        assert!(results.is_stage_highlighted("nielsen"));
    }

    #[test]
    fn test_matches_follow_board_order() {
        let mut board = demo_board();
        board.columns[2].name = "Manhattan prospects".into();

        let results = search(&board, "manhattan");
        let order: Vec<&str> = results
            .matches
            .iter()
            .map(|m| match m {
                SearchMatch::Stage { column_id, .. } => column_id.as_str(),
                SearchMatch::Site { card_id, .. } => card_id.as_str(),
            })
            .collect();
        assert_eq!(order, ["1", "2", "3", "prospects", "4", "5"]);
    }

    #[test]
    fn test_blank_query_has_no_results() {
        let results = search(&demo_board(), "   ");
        assert!(results.is_empty());
        assert_eq!(results.scroll_target(), None);
    }

    #[test]
    fn test_search_state_lifecycle() {
        let board = demo_board();
        let mut state = SearchState::default();

        state.set_query("park");
        assert!(state.results.is_empty());

        let target = state.execute(&board);
        assert!(matches!(target, Some(ScrollTarget::Card { .. })));
        assert!(state.results.is_site_highlighted("2"));

        // Editing to non-blank text keeps the previous results until executed.
        state.set_query("broad");
        assert!(state.results.is_site_highlighted("2"));

        assert!(state.set_query(" "));
        assert!(state.results.is_empty());

        state.set_query("closed");
        state.execute(&board);
        assert!(state.clear());
        assert_eq!(state, SearchState::default());
    }

    #[test]
    fn test_refresh_uses_last_executed_query() {
        let mut board = demo_board();
        let mut state = SearchState::default();
        assert!(!state.refresh(&board));

        state.set_query("park");
        state.execute(&board);
        state.set_query("broad");

        board.columns[0].cards.retain(|c| c.id != "2");
        assert!(state.refresh(&board));
        assert!(state.results.is_empty());
        assert_eq!(state.query, "broad");

        // Nothing executed after blank text.
        state.set_query("");
        assert!(!state.refresh(&board));
    }
}
