//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `view.rs` - pure state and transitions
//! - `state.rs` - the component type wrapping that state
//! - `events.rs` - click dispatch
//! - `render.rs` - rendering logic
//! - `mod.rs` - public exports

pub mod events;
pub mod table;

pub use events::{ComponentEvents, EventResult};
pub use table::{
    Alignment, DataTable, PageDirection, Pagination, SortDirection, SortState, TableEvent,
    TableId, ViewState,
};
