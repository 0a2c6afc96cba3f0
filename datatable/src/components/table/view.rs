//! Pure view state for the table: working rows, sort key and current page.
//!
//! Every transition takes the previous state by value and returns the next
//! one, so the same logic can sit behind a reducer, a store, or the
//! [`DataTable`](super::DataTable) component.

use std::ops::Range;

use super::item::{PageDirection, SortDirection, SortState};

/// An interaction with the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// A header cell was activated (column index).
    HeaderActivated(usize),
    /// A body row was activated (index within the visible page).
    RowActivated(usize),
    /// A pagination control was activated.
    PageNavigated(PageDirection),
}

/// Sort order, current page, and the working copy of the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    rows: Vec<Vec<String>>,
    sort: Option<SortState>,
    /// 1-based.
    page: usize,
}

impl ViewState {
    /// Unsorted state on page 1.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            sort: None,
            page: 1,
        }
    }

    /// The working rows, in current sort order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pagination figures for the current page.
    pub fn pagination(&self, page_size: usize) -> Pagination {
        Pagination::new(self.page, page_size, self.rows.len())
    }

    /// Rows on the current page.
    pub fn visible_rows(&self, page_size: usize) -> &[Vec<String>] {
        let range = self.pagination(page_size).range();
        &self.rows[range]
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Apply an event. Row activation leaves the state unchanged.
    pub fn apply(self, event: TableEvent, page_size: usize) -> Self {
        match event {
            TableEvent::HeaderActivated(column) => self.sort_by_column(column),
            TableEvent::RowActivated(_) => self,
            TableEvent::PageNavigated(direction) => self.navigate(direction, page_size),
        }
    }

    /// Direction the next activation of `column` sorts in.
    ///
    /// Only an ascending sort on the same column flips to descending;
    /// everything else starts ascending.
    pub fn next_direction(&self, column: usize) -> SortDirection {
        match self.sort {
            Some(SortState { column: active, direction })
                if active == column && direction.is_ascending() =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        }
    }

    /// Sort all rows by the text of `column`.
    ///
    /// Plain lexicographic comparison, no numeric coercion ("10" < "2").
    /// Missing cells compare as empty. The sort is stable, so equal cells
    /// keep their previous relative order in both directions. The current
    /// page is kept as-is.
    pub fn sort_by_column(mut self, column: usize) -> Self {
        let direction = self.next_direction(column);
        self.rows.sort_by(|a, b| {
            let ord = cell(a, column).cmp(cell(b, column));
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        self.sort = Some(SortState::new(column, direction));
        self
    }

    /// Move one page back or forward, clamped to the available pages.
    pub fn navigate(self, direction: PageDirection, page_size: usize) -> Self {
        self.navigate_by(direction.delta(), page_size)
    }

    /// Move by `delta` pages, clamped to `[1, max(1, total pages)]`.
    pub fn navigate_by(mut self, delta: isize, page_size: usize) -> Self {
        let last = self.pagination(page_size).total_pages().max(1);
        self.page = self.page.saturating_add_signed(delta).clamp(1, last);
        self
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(String::as_str).unwrap_or("")
}

/// Pagination figures for one page of a row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-indexed).
    pub current_page: usize,
    /// Number of rows per page.
    pub per_page: usize,
    /// Total number of rows.
    pub total_items: usize,
}

impl Pagination {
    /// A zero page size is treated as one row per page.
    pub fn new(current_page: usize, per_page: usize, total_items: usize) -> Self {
        Self {
            current_page: current_page.max(1),
            per_page: per_page.max(1),
            total_items,
        }
    }

    /// Returns the total number of pages.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.per_page)
    }

    /// Returns the start index for the current page (0-indexed).
    pub fn start_index(&self) -> usize {
        (self.current_page - 1) * self.per_page
    }

    /// Returns the end index for the current page (exclusive, 0-indexed).
    pub fn end_index(&self) -> usize {
        (self.start_index() + self.per_page).min(self.total_items)
    }

    /// Index range of the rows on the current page.
    pub fn range(&self) -> Range<usize> {
        let end = self.end_index();
        self.start_index().min(end)..end
    }

    /// Whether the rows overflow a single page.
    pub fn is_paginated(&self) -> bool {
        self.total_items > self.per_page
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Footer text, e.g. "Showing 1 to 10 of 42 entries".
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.start_index() + 1,
            self.end_index(),
            self.total_items
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<Vec<String>> {
        values.iter().map(|v| vec![v.to_string()]).collect()
    }

    #[test]
    fn lexicographic_not_numeric() {
        let state = ViewState::new(rows(&["2", "10", "1"])).sort_by_column(0);
        assert_eq!(state.rows(), rows(&["1", "10", "2"]).as_slice());
    }

    #[test]
    fn next_direction_toggles_only_on_active_column() {
        let state = ViewState::new(rows(&["b", "a"]));
        assert!(state.next_direction(0).is_ascending());

        let state = state.sort_by_column(0);
        assert!(!state.next_direction(0).is_ascending());
        assert!(state.next_direction(1).is_ascending());

        let state = state.sort_by_column(0);
        assert!(state.next_direction(0).is_ascending());
    }

    #[test]
    fn missing_cells_sort_first() {
        let state = ViewState::new(vec![vec!["b".into()], vec![], vec!["a".into()]]);
        let sorted = state.sort_by_column(0);
        assert!(sorted.rows()[0].is_empty());
    }

    #[test]
    fn descending_keeps_ties_in_order() {
        let input = vec![
            vec!["x".to_string(), "1".to_string()],
            vec!["x".to_string(), "2".to_string()],
            vec!["y".to_string(), "3".to_string()],
        ];
        let state = ViewState::new(input).sort_by_column(0).sort_by_column(0);
        let seconds: Vec<&str> = state.rows().iter().map(|r| r[1].as_str()).collect();
        assert_eq!(seconds, ["3", "1", "2"]);
    }

    #[test]
    fn pagination_of_empty_rows() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.range(), 0..0);
        assert!(!p.is_paginated());
        assert!(!p.has_next());
    }

    #[test]
    fn navigate_on_empty_rows_stays_on_first_page() {
        let state = ViewState::new(Vec::new()).navigate(PageDirection::Next, 10);
        assert_eq!(state.page(), 1);
    }
}
