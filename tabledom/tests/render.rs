use tabledom::{to_html, to_text, Element, TextAlign};

fn grid() -> Element {
    Element::div()
        .id("wrap")
        .child(
            Element::table()
                .id("t")
                .child(
                    Element::thead().child(
                        Element::tr()
                            .child(Element::th().text("Name"))
                            .child(Element::th().text("Age").text_align(TextAlign::Right)),
                    ),
                )
                .child(
                    Element::tbody()
                        .child(
                            Element::tr()
                                .child(Element::td("Alice"))
                                .child(Element::td("7").text_align(TextAlign::Right)),
                        )
                        .child(
                            Element::tr()
                                .child(Element::td("Bob"))
                                .child(Element::td("42").text_align(TextAlign::Right)),
                        ),
                ),
        )
        .child(
            Element::div()
                .child(Element::span("2 entries"))
                .child(Element::button("Previous").disabled(true))
                .child(Element::button("Next")),
        )
}

// ============================================================================
// HTML
// ============================================================================

#[test]
fn test_html_includes_classes_and_disabled() {
    let el = Element::button("Next")
        .id("next")
        .class("px-3 py-1")
        .class("")
        .disabled(true);
    assert_eq!(
        to_html(&el),
        "<button id=\"next\" class=\"px-3 py-1\" disabled>Next</button>"
    );
}

#[test]
fn test_html_escapes_text_and_writes_data_attributes() {
    let el = Element::td("<b>&</b>").id("c").data("row", 1);
    assert_eq!(
        to_html(&el),
        "<td id=\"c\" data-row=\"1\">&lt;b&gt;&amp;&lt;/b&gt;</td>"
    );
}

#[test]
fn test_html_nests_children_in_order() {
    let html = to_html(&grid());
    let alice = html.find("Alice").unwrap();
    let bob = html.find("Bob").unwrap();
    assert!(alice < bob);
    assert!(html.starts_with("<div id=\"wrap\">"));
    assert!(html.ends_with("</div>"));
}

// ============================================================================
// Plain text
// ============================================================================

#[test]
fn test_text_lays_out_aligned_grid() {
    let text = to_text(&grid());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Name  | Age");
    assert_eq!(lines[1], "------+----");
    assert_eq!(lines[2], "Alice |   7");
    assert_eq!(lines[3], "Bob   |  42");
}

#[test]
fn test_text_renders_inline_controls_on_one_line() {
    let text = to_text(&grid());
    assert_eq!(text.lines().last(), Some("2 entries (Previous) [Next]"));
}

#[test]
fn test_text_of_empty_table_is_empty() {
    assert_eq!(to_text(&Element::table()), "");
}
