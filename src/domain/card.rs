use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of tags shown on a card before the rest collapse into a "+N" badge.
pub const TAG_PREVIEW_LIMIT: usize = 2;

pub const COPY_SUFFIX: &str = " (Copy)";

const CREATED_DATE_FORMAT: &str = "%d.%m.%y";

/// A tracked site. Owned by exactly one [`Column`](super::Column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub primary_label: String,
    pub secondary_label: String,
    pub description: String,
    pub tags: Vec<String>,
    pub created_date: String,
    pub comment_count: u32,
    pub attachment_count: u32,
    #[serde(default)]
    pub expanded: bool,
    #[serde(default)]
    pub selected: bool,
}

impl Card {
    pub fn visible_tags(&self) -> &[String] {
        let end = self.tags.len().min(TAG_PREVIEW_LIMIT);
        &self.tags[..end]
    }

    pub fn hidden_tag_count(&self) -> usize {
        self.tags.len().saturating_sub(TAG_PREVIEW_LIMIT)
    }

    /// True when any tag contains any of `active` (case-insensitive substring).
    /// An empty filter matches every card.
    pub fn matches_any_tag(&self, active: &[String]) -> bool {
        if active.is_empty() {
            return true;
        }

        active.iter().any(|wanted| {
            let wanted = wanted.to_lowercase();
            self.tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&wanted))
        })
    }

    pub fn created_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.created_date, CREATED_DATE_FORMAT).ok()
    }

    /// Clone under a new identity, marking the label as a copy.
    pub fn duplicate_as(&self, new_id: String) -> Card {
        Card {
            id: new_id,
            primary_label: format!("{}{}", self.primary_label, COPY_SUFFIX),
            ..self.clone()
        }
    }
}
