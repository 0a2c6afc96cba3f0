//! DataTable rendering.

use tabledom::{Element, TextAlign};

use crate::style::{StyleResolver, StyleSlot};

use super::events::{
    ACTION_PAGE, ACTION_ROW, ACTION_SORT, DATA_ACTION, DATA_COLUMN, DATA_DIRECTION, DATA_ROW,
    DATA_TABLE,
};
use super::item::{Alignment, PageDirection, SortState};
use super::state::{DataTable, TableInner};
use super::view::Pagination;

impl DataTable {
    /// Render the table to an element tree.
    ///
    /// Element IDs are derived from the table ID, so the same table renders
    /// the same IDs every time. Clickable elements carry the data
    /// [`on_click`](crate::components::ComponentEvents::on_click) needs to
    /// dispatch them.
    pub fn render(&self, styles: &dyn StyleResolver) -> Element {
        let id = self.id_string();
        let Ok(guard) = self.inner.read() else {
            return Element::div().id(id);
        };

        let pagination = guard.view.pagination(guard.props.page_size());
        log::trace!(
            "[table] {} render page {}/{} ({} rows)",
            id,
            pagination.current_page,
            pagination.total_pages(),
            pagination.total_items
        );

        let table = Element::table()
            .id(format!("{id}-table"))
            .class(class(styles, StyleSlot::Table))
            .child(render_header(&id, &guard, styles))
            .child(render_body(&id, &guard, &pagination, styles));

        let mut root = Element::div().id(id.clone()).child(
            Element::div()
                .id(format!("{id}-wrapper"))
                .class(class(styles, StyleSlot::ResponsiveWrapper))
                .child(table),
        );

        if pagination.is_paginated() {
            root = root.child(render_pagination(&id, &pagination, styles));
        }

        self.clear_dirty();
        root
    }
}

fn class(styles: &dyn StyleResolver, slot: StyleSlot) -> &str {
    styles.class(slot).unwrap_or("")
}

fn render_header(id: &str, inner: &TableInner, styles: &dyn StyleResolver) -> Element {
    let background = inner
        .props
        .header_bg_color
        .as_deref()
        .unwrap_or(class(styles, StyleSlot::HeaderBackground));

    let cells = inner.headers.iter().enumerate().map(|(col_idx, header)| {
        let align = Alignment::for_column(&inner.props.column_alignments, col_idx);
        let mut cell = Element::th()
            .id(format!("{id}-header-{col_idx}"))
            .class(class(styles, StyleSlot::HeaderCell))
            .class(class(styles, align.style_slot()))
            .text_align(TextAlign::from(align))
            .clickable(true)
            .data(DATA_TABLE, id)
            .data(DATA_ACTION, ACTION_SORT)
            .data(DATA_COLUMN, col_idx)
            .child(Element::span(header.as_str()).id(format!("{id}-header-{col_idx}-label")));

        if let Some(SortState { column, direction }) = inner.view.sort()
            && column == col_idx
        {
            cell = cell.child(
                Element::span(format!(" {}", direction.indicator()))
                    .id(format!("{id}-header-{col_idx}-sort")),
            );
        }
        cell
    });

    Element::thead().id(format!("{id}-head")).child(
        Element::tr()
            .id(format!("{id}-header"))
            .class(background)
            .children(cells),
    )
}

fn render_body(
    id: &str,
    inner: &TableInner,
    pagination: &Pagination,
    styles: &dyn StyleResolver,
) -> Element {
    let props = &inner.props;
    let row_color = props
        .row_color
        .as_deref()
        .unwrap_or(class(styles, StyleSlot::RowBackground));
    let alt_row_color = props
        .alt_row_color
        .as_deref()
        .unwrap_or(class(styles, StyleSlot::AltRowBackground));
    let column_count = inner.headers.len();

    let rows = inner.view.rows()[pagination.range()]
        .iter()
        .enumerate()
        .map(|(row_idx, row)| {
            // Striping follows the page-local index: the first row on every page is alternate
            let background = if props.striped && row_idx % 2 == 0 {
                alt_row_color
            } else {
                row_color
            };
            let hover = if props.hover_highlight {
                class(styles, StyleSlot::Hover)
            } else {
                ""
            };

            // Short rows are padded with empty cells, long rows keep their extras
            let cells = (0..row.len().max(column_count)).map(|col_idx| {
                let align = Alignment::for_column(&props.column_alignments, col_idx);
                let text = row.get(col_idx).map(String::as_str).unwrap_or("");
                Element::td(text)
                    .id(format!("{id}-cell-{row_idx}-{col_idx}"))
                    .class(class(styles, StyleSlot::BodyCell))
                    .class(class(styles, align.style_slot()))
                    .text_align(TextAlign::from(align))
            });

            Element::tr()
                .id(format!("{id}-row-{row_idx}"))
                .class(background)
                .class(hover)
                .class(class(styles, StyleSlot::ClickableRow))
                .clickable(true)
                .data(DATA_TABLE, id)
                .data(DATA_ACTION, ACTION_ROW)
                .data(DATA_ROW, row_idx)
                .children(cells)
        });

    Element::tbody().id(format!("{id}-body")).children(rows)
}

fn render_pagination(id: &str, pagination: &Pagination, styles: &dyn StyleResolver) -> Element {
    let button = |direction: PageDirection, label: &str, slot: StyleSlot, enabled: bool| {
        Element::button(label)
            .id(format!("{id}-{}", direction.as_str()))
            .class(class(styles, slot))
            .disabled(!enabled)
            .data(DATA_TABLE, id)
            .data(DATA_ACTION, ACTION_PAGE)
            .data(DATA_DIRECTION, direction.as_str())
    };

    Element::div()
        .id(format!("{id}-pagination"))
        .class(class(styles, StyleSlot::PaginationBar))
        .child(
            Element::span(pagination.summary())
                .id(format!("{id}-entries"))
                .class(class(styles, StyleSlot::EntriesLabel)),
        )
        .child(
            Element::div()
                .id(format!("{id}-pages"))
                .child(button(
                    PageDirection::Previous,
                    "Previous",
                    StyleSlot::PreviousButton,
                    pagination.has_previous(),
                ))
                .child(button(
                    PageDirection::Next,
                    "Next",
                    StyleSlot::NextButton,
                    pagination.has_next(),
                )),
        )
}
