use std::fmt::Write;

use crate::element::{Content, Element};

/// Serialize an element tree to markup.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    let tag = element.tag.name();
    let _ = write!(out, "<{tag} id=\"{}\"", escape(&element.id));

    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&element.classes.to_string()));
    }
    for (key, value) in &element.data {
        let _ = write!(out, " data-{}=\"{}\"", escape(key), escape(value));
    }
    if element.disabled {
        out.push_str(" disabled");
    }
    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    let _ = write!(out, "</{tag}>");
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
