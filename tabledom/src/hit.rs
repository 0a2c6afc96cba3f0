use crate::element::Element;

/// Chain of elements from `root` down to the element with `id`, inclusive.
/// Returns None if no element has that ID.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }

    for child in element.content.children() {
        if collect_path(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Find the element a click on `id` lands on: the deepest clickable element
/// on the path from the root to `id` (the target itself or its nearest
/// clickable ancestor).
///
/// Disabled elements are returned as-is; callers decide whether to ignore
/// them, since a disabled button still swallows the click.
pub fn clickable_target<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    let path = path_to(root, id)?;
    let target = path.into_iter().rev().find(|el| el.clickable);
    if target.is_none() {
        log::trace!("[hit] no clickable element on path to {}", id);
    }
    target
}
