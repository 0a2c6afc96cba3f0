use tabledom::{
    clickable_target, find_by_text, find_element, path_to, text_content, Content, Element, Tag,
};

fn sample_tree() -> Element {
    Element::div().id("root").child(
        Element::table().id("table").child(
            Element::tbody().id("body").child(
                Element::tr()
                    .id("row-0")
                    .clickable(true)
                    .child(Element::td("Alice").id("cell-0-0"))
                    .child(Element::td("25").id("cell-0-1")),
            ),
        ),
    )
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_generated_ids_are_unique_and_prefixed() {
    let a = Element::tr();
    let b = Element::tr();
    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("tr-"));
}

#[test]
fn test_child_converts_text_content() {
    let el = Element::span("text").child(Element::span("child"));
    match &el.content {
        Content::Children(children) => assert_eq!(children.len(), 1),
        other => panic!("expected children, got {other:?}"),
    }
}

#[test]
fn test_button_is_clickable() {
    let button = Element::button("Next");
    assert_eq!(button.tag, Tag::Button);
    assert!(button.clickable);
    assert!(!button.disabled);
}

#[test]
fn test_data_round_trips_through_accessor() {
    let el = Element::tr().data("row", 3);
    assert_eq!(el.get_data("row"), Some("3"));
    assert_eq!(el.get_data("missing"), None);
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_find_element_by_id() {
    let root = sample_tree();
    assert_eq!(find_element(&root, "cell-0-1").map(|e| e.tag), Some(Tag::Td));
    assert!(find_element(&root, "nope").is_none());
}

#[test]
fn test_find_by_text_matches_own_text_only() {
    let root = sample_tree();
    assert_eq!(find_by_text(&root, "Alice").map(|e| e.id.as_str()), Some("cell-0-0"));
    assert!(find_by_text(&root, "Alice25").is_none());
}

#[test]
fn test_text_content_concatenates_descendants() {
    let root = sample_tree();
    assert_eq!(text_content(&root), "Alice25");
}

// ============================================================================
// Click targeting
// ============================================================================

#[test]
fn test_path_to_includes_root_and_target() {
    let root = sample_tree();
    let ids: Vec<&str> = path_to(&root, "cell-0-0")
        .unwrap()
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(ids, ["root", "table", "body", "row-0", "cell-0-0"]);
}

#[test]
fn test_click_on_cell_bubbles_to_row() {
    let root = sample_tree();
    let target = clickable_target(&root, "cell-0-0").unwrap();
    assert_eq!(target.id, "row-0");
}

#[test]
fn test_click_outside_clickable_elements_has_no_target() {
    let root = sample_tree();
    assert!(clickable_target(&root, "table").is_none());
    assert!(clickable_target(&root, "unknown").is_none());
}
