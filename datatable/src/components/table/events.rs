//! Click dispatch for the DataTable component.

use tabledom::{clickable_target, Element};

use crate::components::events::{ComponentEvents, EventResult};

use super::item::PageDirection;
use super::state::DataTable;
use super::view::TableEvent;

/// Data key holding the owning table's ID.
pub(super) const DATA_TABLE: &str = "table";
/// Data key holding the action name.
pub(super) const DATA_ACTION: &str = "action";
/// Data key holding the column index of a header cell.
pub(super) const DATA_COLUMN: &str = "column";
/// Data key holding the page-local index of a body row.
pub(super) const DATA_ROW: &str = "row";
/// Data key holding a pagination direction.
pub(super) const DATA_DIRECTION: &str = "direction";

pub(super) const ACTION_SORT: &str = "sort";
pub(super) const ACTION_ROW: &str = "row";
pub(super) const ACTION_PAGE: &str = "page";

impl TableEvent {
    /// Decode the event a rendered table element triggers when clicked.
    pub fn from_element(element: &Element) -> Option<Self> {
        match element.get_data(DATA_ACTION)? {
            ACTION_SORT => element
                .get_data(DATA_COLUMN)?
                .parse()
                .ok()
                .map(TableEvent::HeaderActivated),
            ACTION_ROW => element
                .get_data(DATA_ROW)?
                .parse()
                .ok()
                .map(TableEvent::RowActivated),
            ACTION_PAGE => PageDirection::parse(element.get_data(DATA_DIRECTION)?)
                .map(TableEvent::PageNavigated),
            _ => None,
        }
    }
}

impl ComponentEvents for DataTable {
    fn on_click(&self, root: &Element, element_id: &str) -> EventResult {
        let Some(target) = clickable_target(root, element_id) else {
            return EventResult::Ignored;
        };

        // Clicks on another table's elements are not ours
        if target.get_data(DATA_TABLE) != Some(self.id_string().as_str()) {
            return EventResult::Ignored;
        }

        // A disabled control swallows the click without acting on it
        if target.disabled {
            log::trace!("[table] {} click on disabled {}", self.id(), target.id);
            return EventResult::Consumed;
        }

        match TableEvent::from_element(target) {
            Some(event) => {
                log::trace!("[table] {} click on {} -> {:?}", self.id(), target.id, event);
                self.handle(event)
            }
            None => EventResult::Ignored,
        }
    }
}
