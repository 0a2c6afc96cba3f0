use unicode_width::UnicodeWidthStr;

use crate::element::{text_content, Content, Element};
use crate::types::{Tag, TextAlign};

/// Separator between grid columns.
const COLUMN_SEPARATOR: &str = " | ";

/// Render an element tree as plain text, one line per block.
///
/// Tables become an aligned grid sized by display width, with a rule under
/// the header rows. Buttons render as `[label]`, or `(label)` when disabled.
pub fn to_text(root: &Element) -> String {
    let mut lines = Vec::new();
    render_block(root, &mut lines);
    lines.join("\n")
}

fn render_block(element: &Element, lines: &mut Vec<String>) {
    if element.tag == Tag::Table {
        render_table(element, lines);
        return;
    }

    if element.tag.is_inline() {
        lines.push(render_inline(element));
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => lines.push(text.clone()),
        Content::Children(children) => {
            // Consecutive inline children share a line
            let mut pending: Vec<String> = Vec::new();
            for child in children {
                if child.tag.is_inline() {
                    pending.push(render_inline(child));
                } else {
                    flush_inline(&mut pending, lines);
                    render_block(child, lines);
                }
            }
            flush_inline(&mut pending, lines);
        }
    }
}

fn flush_inline(pending: &mut Vec<String>, lines: &mut Vec<String>) {
    if !pending.is_empty() {
        lines.push(pending.join(" "));
        pending.clear();
    }
}

fn render_inline(element: &Element) -> String {
    let text = text_content(element);
    match element.tag {
        Tag::Button if element.disabled => format!("({text})"),
        Tag::Button => format!("[{text}]"),
        _ => text,
    }
}

struct GridRow {
    cells: Vec<(String, TextAlign)>,
    header: bool,
}

fn render_table(table: &Element, lines: &mut Vec<String>) {
    let mut rows = Vec::new();
    collect_rows(table, false, &mut rows);
    if rows.is_empty() {
        return;
    }

    let column_count = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    let mut widths = vec![0usize; column_count];
    for row in &rows {
        for (i, (text, _)) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(text.width());
        }
    }

    let header_rows = rows.iter().take_while(|r| r.header).count();
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| match row.cells.get(i) {
                Some((text, align)) => pad(text, width, *align),
                None => " ".repeat(width),
            })
            .collect();
        lines.push(cells.join(COLUMN_SEPARATOR).trim_end().to_string());

        if header_rows > 0 && index + 1 == header_rows {
            let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
            lines.push(rule.join("-+-"));
        }
    }
}

fn collect_rows(element: &Element, in_head: bool, rows: &mut Vec<GridRow>) {
    for child in element.content.children() {
        match child.tag {
            Tag::Thead => collect_rows(child, true, rows),
            Tag::Tbody => collect_rows(child, false, rows),
            Tag::Tr => {
                let cells = child
                    .content
                    .children()
                    .iter()
                    .filter(|cell| matches!(cell.tag, Tag::Th | Tag::Td))
                    .map(|cell| (text_content(cell), cell.text_align.unwrap_or_default()))
                    .collect();
                rows.push(GridRow {
                    cells,
                    header: in_head,
                });
            }
            _ => {}
        }
    }
}

fn pad(text: &str, width: usize, align: TextAlign) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        TextAlign::Left => format!("{text}{}", " ".repeat(fill)),
        TextAlign::Right => format!("{}{text}", " ".repeat(fill)),
        TextAlign::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}
