use serde::Serialize;

use crate::domain::{Card, Column, SortOrder};
use crate::services::drag::DragItem;
use crate::services::search::SearchMatch;

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: String,
    pub primary_label: String,
    pub secondary_label: String,
    pub description: String,
    pub tags: Vec<String>,
    pub visible_tags: Vec<String>,
    pub hidden_tag_count: usize,
    pub created_date: String,
    pub comment_count: u32,
    pub attachment_count: u32,
    pub expanded: bool,
    pub selected: bool,
    pub highlighted: bool,
}

impl CardView {
    pub fn from_card(card: &Card, highlighted: bool) -> Self {
        Self {
            id: card.id.clone(),
            primary_label: card.primary_label.clone(),
            secondary_label: card.secondary_label.clone(),
            description: card.description.clone(),
            tags: card.tags.clone(),
            visible_tags: card.visible_tags().to_vec(),
            hidden_tag_count: card.hidden_tag_count(),
            created_date: card.created_date.clone(),
            comment_count: card.comment_count,
            attachment_count: card.attachment_count,
            expanded: card.expanded,
            selected: card.selected,
            highlighted,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnView {
    pub id: String,
    pub name: String,
    pub color: String,
    pub border_color: String,
    /// Number of cards shown, after tag filtering.
    pub count: usize,
    pub selected: bool,
    pub collapsed: bool,
    pub highlighted: bool,
    pub can_drop: bool,
    pub cards: Vec<CardView>,
}

impl ColumnView {
    pub fn new(column: &Column, cards: Vec<CardView>) -> Self {
        Self {
            id: column.id.clone(),
            name: column.name.clone(),
            color: column.color.clone(),
            border_color: column.border_color.clone(),
            count: cards.len(),
            selected: column.selected,
            collapsed: false,
            highlighted: false,
            can_drop: false,
            cards,
        }
    }
}

/// Everything the presentation layer needs to render one frame.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    pub active_tags: Vec<String>,
    pub search_query: String,
    pub search_matches: Vec<SearchMatch>,
    pub sort: SortOrder,
    pub all_collapsed: bool,
    pub all_selected: bool,
    pub selected_card_ids: Vec<String>,
    pub open_card: Option<Card>,
    pub dragging: Option<DragItem>,
}

impl BoardView {
    pub fn column(&self, column_id: &str) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.id == column_id)
    }
}
