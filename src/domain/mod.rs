pub mod board;
pub mod card;
pub mod column;
pub mod error;
pub mod intent;
pub mod sort;

pub use board::{Board, CardLocation};
pub use card::Card;
pub use column::Column;
pub use error::KanbanError;
pub use intent::Intent;
pub use sort::SortOrder;
