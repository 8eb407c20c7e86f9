pub mod board_store;
pub mod dashboard;
pub mod drag;
pub mod filter;
pub mod search;
pub mod selection;
pub mod view;

pub use board_store::BoardStore;
pub use dashboard::{Dashboard, IntentOutcome};
pub use drag::{DragItem, DragTracker};
pub use filter::TagFilter;
pub use search::{ScrollTarget, SearchMatch, SearchResults, SearchState};
pub use view::{BoardView, CardView, ColumnView};
