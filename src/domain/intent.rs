use serde::{Deserialize, Serialize};

use super::{KanbanError, SortOrder};

/// A named user action raised by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    MoveCard {
        card_id: String,
        from_column_id: String,
        to_column_id: String,
    },
    MoveColumn {
        dragged_column_id: String,
        target_column_id: String,
    },
    AddColumn {
        #[serde(default)]
        name: Option<String>,
    },
    RenameColumn {
        column_id: String,
        name: String,
    },
    DeleteCard {
        card_id: String,
    },
    DuplicateCard {
        card_id: String,
    },
    ToggleCardExpanded {
        card_id: String,
    },
    SetCardSelected {
        column_id: String,
        card_id: String,
        selected: bool,
    },
    SetColumnSelected {
        column_id: String,
        selected: bool,
    },
    SetAllSelected {
        selected: bool,
    },
    ToggleTag {
        tag: String,
    },
    ClearTags,
    SetSearchQuery {
        query: String,
    },
    ExecuteSearch,
    ClearSearch,
    SetSort {
        sort: SortOrder,
    },
    ToggleCollapseAll,
    ToggleColumnCollapsed {
        column_id: String,
    },
    OpenCard {
        card_id: String,
    },
    CloseCard,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Intent::MoveCard { .. } => "move_card",
            Intent::MoveColumn { .. } => "move_column",
            Intent::AddColumn { .. } => "add_column",
            Intent::RenameColumn { .. } => "rename_column",
            Intent::DeleteCard { .. } => "delete_card",
            Intent::DuplicateCard { .. } => "duplicate_card",
            Intent::ToggleCardExpanded { .. } => "toggle_card_expanded",
            Intent::SetCardSelected { .. } => "set_card_selected",
            Intent::SetColumnSelected { .. } => "set_column_selected",
            Intent::SetAllSelected { .. } => "set_all_selected",
            Intent::ToggleTag { .. } => "toggle_tag",
            Intent::ClearTags => "clear_tags",
            Intent::SetSearchQuery { .. } => "set_search_query",
            Intent::ExecuteSearch => "execute_search",
            Intent::ClearSearch => "clear_search",
            Intent::SetSort { .. } => "set_sort",
            Intent::ToggleCollapseAll => "toggle_collapse_all",
            Intent::ToggleColumnCollapsed { .. } => "toggle_column_collapsed",
            Intent::OpenCard { .. } => "open_card",
            Intent::CloseCard => "close_card",
        }
    }

    /// Whether the intent can change what a search over the board finds.
    pub fn reshapes_board(&self) -> bool {
        matches!(
            self,
            Intent::MoveCard { .. }
                | Intent::MoveColumn { .. }
                | Intent::AddColumn { .. }
                | Intent::RenameColumn { .. }
                | Intent::DeleteCard { .. }
                | Intent::DuplicateCard { .. }
        )
    }

    /// Rejects intents that are malformed regardless of board state.
    /// Stale ids are not malformed; those degrade to no-ops when applied.
    pub fn validate(&self) -> Result<(), KanbanError> {
        match self {
            Intent::RenameColumn { name, .. } if name.trim().is_empty() => Err(
                KanbanError::BadRequest("Column name must not be blank".into()),
            ),
            Intent::AddColumn { name: Some(name) } if name.trim().is_empty() => Err(
                KanbanError::BadRequest("Column name must not be blank".into()),
            ),
            Intent::ToggleTag { tag } if tag.trim().is_empty() => {
                Err(KanbanError::BadRequest("Tag must not be blank".into()))
            }
            _ => Ok(()),
        }
    }
}
