use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Card;

/// Ordering applied to each column's cards in the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Board order, as placed by moves and duplicates.
    #[default]
    Manual,
    AlphaAsc,
    AlphaDesc,
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Manual => "manual",
            SortOrder::AlphaAsc => "A–Z",
            SortOrder::AlphaDesc => "Z–A",
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    pub fn all() -> &'static [SortOrder] {
        &[
            SortOrder::Manual,
            SortOrder::AlphaAsc,
            SortOrder::AlphaDesc,
            SortOrder::Newest,
            SortOrder::Oldest,
        ]
    }

    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self {
            SortOrder::Manual => Ordering::Equal,
            SortOrder::AlphaAsc => label_key(a).cmp(&label_key(b)),
            SortOrder::AlphaDesc => label_key(b).cmp(&label_key(a)),
            SortOrder::Newest => by_date(a, b, true),
            SortOrder::Oldest => by_date(a, b, false),
        }
    }

    /// Stable sort, so equal keys keep board order.
    pub fn sort(&self, cards: &mut [&Card]) {
        if *self != SortOrder::Manual {
            cards.sort_by(|a, b| self.compare(a, b));
        }
    }
}

fn label_key(card: &Card) -> String {
    card.primary_label.to_lowercase()
}

// Undated cards go last in either direction.
fn by_date(a: &Card, b: &Card, newest_first: bool) -> Ordering {
    match (a.created_on(), b.created_on()) {
        (Some(x), Some(y)) if newest_first => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(SortOrder::Manual),
            "a–z" | "a-z" | "alpha_asc" => Ok(SortOrder::AlphaAsc),
            "z–a" | "z-a" | "alpha_desc" => Ok(SortOrder::AlphaDesc),
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            _ => Err(format!(
                "Invalid sort order: {}. Expected one of: {}",
                s,
                SortOrder::all()
                    .iter()
                    .map(|o| o.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
