mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the first element (depth-first, document order) whose own text
/// equals `text`.
pub fn find_by_text<'a>(root: &'a Element, text: &str) -> Option<&'a Element> {
    if root.own_text() == Some(text) {
        return Some(root);
    }

    for child in root.content.children() {
        if let Some(found) = find_by_text(child, text) {
            return Some(found);
        }
    }

    None
}

/// Concatenated text of the element and all its descendants.
pub fn text_content(root: &Element) -> String {
    let mut out = String::new();
    collect_text(root, &mut out);
    out
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
    }
}
