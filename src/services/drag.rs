use serde::Serialize;

use crate::domain::Intent;

/// What is currently being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DragItem {
    Card { card_id: String, column_id: String },
    Column { column_id: String },
}

/// Turns pointer-level drag gestures into resolved move intents, so the
/// store only ever sees "move X to Y".
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    active: Option<DragItem>,
}

impl DragTracker {
    pub fn active(&self) -> Option<&DragItem> {
        self.active.as_ref()
    }

    pub fn begin_card_drag(&mut self, card_id: &str, column_id: &str) {
        self.active = Some(DragItem::Card {
            card_id: card_id.to_string(),
            column_id: column_id.to_string(),
        });
    }

    pub fn begin_column_drag(&mut self, column_id: &str) {
        self.active = Some(DragItem::Column {
            column_id: column_id.to_string(),
        });
    }

    pub fn end_drag(&mut self) {
        self.active = None;
    }

    /// A card may land on any column except the one it came from.
    pub fn can_drop_card_on(&self, column_id: &str) -> bool {
        matches!(&self.active, Some(DragItem::Card { column_id: source, .. }) if source != column_id)
    }

    pub fn is_dragging_column(&self, column_id: &str) -> bool {
        matches!(&self.active, Some(DragItem::Column { column_id: dragged }) if dragged == column_id)
    }

    /// Ends the drag and resolves it against the column under the pointer.
    pub fn drop_on(&mut self, column_id: &str) -> Option<Intent> {
        match self.active.take()? {
            DragItem::Card {
                card_id,
                column_id: source,
            } => (source != column_id).then(|| Intent::MoveCard {
                card_id,
                from_column_id: source,
                to_column_id: column_id.to_string(),
            }),
            DragItem::Column { column_id: dragged } => {
                (dragged != column_id).then(|| Intent::MoveColumn {
                    dragged_column_id: dragged,
                    target_column_id: column_id.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_drop_resolves_to_move() {
        let mut drag = DragTracker::default();
        drag.begin_card_drag("1", "nielsen");

        assert!(drag.can_drop_card_on("prospects"));
        assert!(!drag.can_drop_card_on("nielsen"));

        assert_eq!(
            drag.drop_on("prospects"),
            Some(Intent::MoveCard {
                card_id: "1".into(),
                from_column_id: "nielsen".into(),
                to_column_id: "prospects".into(),
            })
        );
        assert!(drag.active().is_none());
    }

    #[test]
    fn test_drop_on_source_resolves_to_nothing() {
        let mut drag = DragTracker::default();
        drag.begin_card_drag("1", "nielsen");
        assert_eq!(drag.drop_on("nielsen"), None);
        assert!(drag.active().is_none());
    }

    #[test]
    fn test_column_drop_resolves_to_reorder() {
        let mut drag = DragTracker::default();
        drag.begin_column_drag("closed");
        assert!(drag.is_dragging_column("closed"));
        assert!(!drag.can_drop_card_on("nielsen"));

        assert_eq!(
            drag.drop_on("nielsen"),
            Some(Intent::MoveColumn {
                dragged_column_id: "closed".into(),
                target_column_id: "nielsen".into(),
            })
        );
    }

    #[test]
    fn test_drop_without_drag() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.drop_on("nielsen"), None);

        drag.begin_column_drag("closed");
        drag.end_drag();
        assert_eq!(drag.drop_on("nielsen"), None);
    }
}
