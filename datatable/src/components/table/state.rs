//! Table component state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::components::events::EventResult;
use crate::config::{Configuration, DEFAULT_ROWS_PER_PAGE};

use super::item::{Alignment, PageDirection, SortState};
use super::view::{Pagination, TableEvent, ViewState};

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Callback invoked when a body row is activated.
///
/// Receives the row's cells and its index within the visible page.
#[derive(Clone)]
pub struct RowClickHandler(Arc<dyn Fn(&[String], usize) + Send + Sync>);

impl RowClickHandler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[String], usize) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, row: &[String], index: usize) {
        (self.0)(row, index)
    }
}

impl fmt::Debug for RowClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowClickHandler(..)")
    }
}

/// Presentation properties, fixed at construction.
#[derive(Debug, Clone)]
pub(super) struct TableProps {
    pub hover_highlight: bool,
    /// Class overriding the header background slot.
    pub header_bg_color: Option<String>,
    /// Class overriding the row background slot.
    pub row_color: Option<String>,
    /// Class overriding the alternate row background slot.
    pub alt_row_color: Option<String>,
    pub striped: bool,
    pub column_alignments: Vec<Alignment>,
    /// Per-instance page size; wins over `default_rows_per_page`.
    pub rows_per_page: Option<usize>,
    /// Page size from configuration.
    pub default_rows_per_page: usize,
}

impl Default for TableProps {
    fn default() -> Self {
        Self {
            hover_highlight: false,
            header_bg_color: None,
            row_color: None,
            alt_row_color: None,
            striped: true,
            column_alignments: Vec::new(),
            rows_per_page: None,
            default_rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl TableProps {
    pub fn page_size(&self) -> usize {
        self.rows_per_page.unwrap_or(self.default_rows_per_page)
    }
}

/// Internal state for the DataTable component.
#[derive(Debug)]
pub(super) struct TableInner {
    /// Header labels.
    pub headers: Vec<String>,
    /// Working rows, sort key and current page.
    pub view: ViewState,
    pub props: TableProps,
    pub on_row_click: Option<RowClickHandler>,
}

/// A sortable, paginated table over a fixed grid of string cells.
///
/// `DataTable` holds its own copy of the rows; the caller's data is never
/// touched. Clones share state, so a clone handed to an event handler sees
/// the same sort order and page as the one being rendered.
///
/// - Activating a header sorts by that column, toggling ascending and
///   descending on repeated activation.
/// - Activating a row calls the `on_row_click` handler with the row's cells
///   and its index on the visible page.
/// - Previous/Next move between pages, clamped at both ends.
#[derive(Debug)]
pub struct DataTable {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl DataTable {
    /// Create a table from header labels and rows of cells.
    pub fn new<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: AsRef<str>,
    {
        let headers = headers
            .into_iter()
            .map(|h| h.as_ref().to_string())
            .collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.as_ref().to_string()).collect())
            .collect();

        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner {
                headers,
                view: ViewState::new(rows),
                props: TableProps::default(),
                on_row_click: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    fn update_props(self, f: impl FnOnce(&mut TableProps)) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard.props);
        }
        self
    }

    /// Take the default page size from resolved configuration.
    pub fn with_config(self, config: &Configuration) -> Self {
        let rows_per_page = config.rows_per_page();
        self.update_props(|p| p.default_rows_per_page = rows_per_page)
    }

    /// Set the page size for this table. Zero is ignored.
    pub fn with_rows_per_page(self, rows_per_page: usize) -> Self {
        if rows_per_page == 0 {
            log::warn!("[table] ignoring rows_per_page of 0");
            return self;
        }
        self.update_props(|p| p.rows_per_page = Some(rows_per_page))
    }

    /// Highlight body rows on hover.
    pub fn with_hover_highlight(self, hover_highlight: bool) -> Self {
        self.update_props(|p| p.hover_highlight = hover_highlight)
    }

    /// Alternate row backgrounds on the visible page (default on).
    pub fn with_striped(self, striped: bool) -> Self {
        self.update_props(|p| p.striped = striped)
    }

    /// Class for the header row background.
    pub fn with_header_bg_color(self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.update_props(|p| p.header_bg_color = Some(class))
    }

    /// Class for the row background.
    pub fn with_row_color(self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.update_props(|p| p.row_color = Some(class))
    }

    /// Class for the alternate row background.
    pub fn with_alt_row_color(self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.update_props(|p| p.alt_row_color = Some(class))
    }

    /// Per-column alignment, by position. Columns past the end align left.
    pub fn with_column_alignments(self, alignments: impl IntoIterator<Item = Alignment>) -> Self {
        let alignments = alignments.into_iter().collect();
        self.update_props(|p| p.column_alignments = alignments)
    }

    /// Set the row activation handler.
    pub fn on_row_click<F>(self, f: F) -> Self
    where
        F: Fn(&[String], usize) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_row_click = Some(RowClickHandler::new(f));
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    /// Get the header labels.
    pub fn headers(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.headers.clone())
            .unwrap_or_default()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.view.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all working rows, in current sort order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.inner
            .read()
            .map(|g| g.view.rows().to_vec())
            .unwrap_or_default()
    }

    /// Get the rows on the current page.
    pub fn visible_rows(&self) -> Vec<Vec<String>> {
        self.inner
            .read()
            .map(|g| g.view.visible_rows(g.props.page_size()).to_vec())
            .unwrap_or_default()
    }

    /// Get a snapshot of the view state.
    pub fn view(&self) -> Option<ViewState> {
        self.inner.read().ok().map(|g| g.view.clone())
    }

    /// Get current sort state.
    pub fn sort(&self) -> Option<SortState> {
        self.inner.read().ok().and_then(|g| g.view.sort())
    }

    /// Get the current page (1-based).
    pub fn page(&self) -> usize {
        self.inner.read().map(|g| g.view.page()).unwrap_or(1)
    }

    /// Get the effective page size.
    pub fn rows_per_page(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.props.page_size())
            .unwrap_or(DEFAULT_ROWS_PER_PAGE)
    }

    /// Get the total number of pages.
    pub fn total_pages(&self) -> usize {
        self.pagination().total_pages()
    }

    /// Get pagination figures for the current page.
    pub fn pagination(&self) -> Pagination {
        self.inner
            .read()
            .map(|g| g.view.pagination(g.props.page_size()))
            .unwrap_or_else(|_| Pagination::new(1, DEFAULT_ROWS_PER_PAGE, 0))
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Handle a table event.
    pub fn handle(&self, event: TableEvent) -> EventResult {
        match event {
            TableEvent::HeaderActivated(column) => self.activate_header(column),
            TableEvent::RowActivated(index) => self.activate_row(index),
            TableEvent::PageNavigated(direction) => self.navigate(direction),
        }
    }

    /// Sort by `column`, toggling direction if it is already the ascending
    /// sort key. The current page is left where it is.
    pub fn activate_header(&self, column: usize) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if column >= guard.headers.len() {
            log::trace!("[table] {} ignoring header {} (out of range)", self.id, column);
            return EventResult::Ignored;
        }

        let page_size = guard.props.page_size();
        let view = std::mem::take(&mut guard.view);
        guard.view = view.apply(TableEvent::HeaderActivated(column), page_size);
        if let Some(sort) = guard.view.sort() {
            log::debug!(
                "[table] {} sorted by column {} {:?} (page {})",
                self.id,
                sort.column,
                sort.direction,
                guard.view.page()
            );
        }
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    /// Activate the row at `index` on the visible page.
    ///
    /// Calls the row click handler, if any. The handler runs after the state
    /// lock is released, so it may read the table.
    pub fn activate_row(&self, index: usize) -> EventResult {
        let (row, handler) = {
            let Ok(guard) = self.inner.read() else {
                return EventResult::Ignored;
            };
            let visible = guard.view.visible_rows(guard.props.page_size());
            let Some(row) = visible.get(index) else {
                log::trace!("[table] {} ignoring row {} (not on page)", self.id, index);
                return EventResult::Ignored;
            };
            (row.clone(), guard.on_row_click.clone())
        };

        log::debug!("[table] {} row {} activated", self.id, index);
        if let Some(handler) = handler {
            handler.call(&row, index);
        }
        EventResult::Consumed
    }

    /// Move one page back or forward. A no-op at the first/last page.
    pub fn navigate(&self, direction: PageDirection) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };

        let page_size = guard.props.page_size();
        let previous = guard.view.page();
        let view = std::mem::take(&mut guard.view);
        guard.view = view.navigate(direction, page_size);

        if guard.view.page() == previous {
            return EventResult::Ignored;
        }
        log::debug!(
            "[table] {} page {} -> {}",
            self.id,
            previous,
            guard.view.page()
        );
        self.dirty.store(true, Ordering::SeqCst);
        EventResult::Consumed
    }

    /// Go to the previous page.
    pub fn previous_page(&self) -> EventResult {
        self.navigate(PageDirection::Previous)
    }

    /// Go to the next page.
    pub fn next_page(&self) -> EventResult {
        self.navigate(PageDirection::Next)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for DataTable {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
