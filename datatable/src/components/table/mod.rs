//! DataTable component - a sortable, paginated table of string cells.
//!
//! The DataTable component provides:
//! - Header-click sorting by a single column (ascending, then descending)
//! - Fixed-size pages with Previous/Next controls and an entries summary
//! - Optional striping and hover highlighting
//! - Per-column alignment
//! - A row activation callback
//!
//! Presentation classes come from a [`StyleResolver`](crate::style::StyleResolver);
//! the default page size comes from [`Configuration`](crate::config::Configuration).
//!
//! # Example
//!
//! ```rust
//! use datatable::prelude::*;
//!
//! let config = Configuration::default();
//! let table = DataTable::new(
//!     ["Name", "Age"],
//!     [["John Doe", "28"], ["Alice", "25"]],
//! )
//! .with_config(&config)
//! .with_column_alignments([Alignment::Left, Alignment::Right])
//! .on_row_click(|row, index| println!("clicked {index}: {row:?}"));
//!
//! table.activate_header(0);
//! let root = table.render(&StyleSheet::default());
//! assert!(to_html(&root).contains("Alice"));
//! ```

mod events;
mod item;
mod render;
mod state;
mod view;

pub use item::{Alignment, PageDirection, SortDirection, SortState};
pub use state::{DataTable, RowClickHandler, TableId};
pub use view::{Pagination, TableEvent, ViewState};
