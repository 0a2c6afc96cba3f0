pub mod components;
pub mod config;
pub mod style;

pub mod prelude {
    pub use crate::components::{
        Alignment, ComponentEvents, DataTable, EventResult, PageDirection, Pagination,
        SortDirection, SortState, TableEvent, TableId, ViewState,
    };
    pub use crate::config::{ConfigError, Configuration};
    pub use crate::style::{StyleResolver, StyleSheet, StyleSlot};

    pub use tabledom::{Element, to_html, to_text};
}
