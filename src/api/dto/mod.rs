pub mod board;
pub mod cards;
pub mod columns;

pub use board::{IntentResponse, SearchQueryRequest, SelectAllRequest, SortRequest};
pub use cards::{BeginCardDragRequest, CardResponse, MoveCardRequest, SelectCardRequest};
pub use columns::{
    CreateColumnRequest, MoveColumnRequest, RenameColumnRequest, SelectColumnRequest,
};
