use datatable::style::{StyleResolver, StyleSheet, StyleSlot};

#[test]
fn test_default_sheet_resolves_every_slot() {
    let sheet = StyleSheet::default();
    for slot in StyleSlot::ALL {
        assert!(sheet.class(slot).is_some(), "no class for {slot:?}");
    }
    assert_eq!(sheet.class(StyleSlot::AlignCenter), Some("text-center"));
    assert_eq!(sheet.class(StyleSlot::Hover), Some("hover:bg-gray-200"));
}

#[test]
fn test_unstyled_sheet_resolves_nothing() {
    let sheet = StyleSheet::unstyled();
    assert!(sheet.is_empty());
    assert!(StyleSlot::ALL.iter().all(|&slot| sheet.class(slot).is_none()));
}

#[test]
fn test_sheet_from_json() {
    let sheet: StyleSheet = serde_json::from_str(
        r#"{ "header-background": "hdr", "previous-button": "btn btn-prev" }"#,
    )
    .unwrap();
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.class(StyleSlot::HeaderBackground), Some("hdr"));
    assert_eq!(sheet.class(StyleSlot::PreviousButton), Some("btn btn-prev"));
    assert_eq!(sheet.class(StyleSlot::Table), None);
}

#[test]
fn test_unknown_slot_name_is_rejected() {
    let result: Result<StyleSheet, _> = serde_json::from_str(r#"{ "footer": "x" }"#);
    assert!(result.is_err());
}

#[test]
fn test_merged_overlays_slot_by_slot() {
    let overrides = StyleSheet::unstyled().with(StyleSlot::RowBackground, "bg-zinc-900");
    let sheet = StyleSheet::default().merged(overrides);
    assert_eq!(sheet.class(StyleSlot::RowBackground), Some("bg-zinc-900"));
    assert_eq!(sheet.class(StyleSlot::AltRowBackground), Some("bg-gray-100"));
}

#[test]
fn test_remove_slot() {
    let mut sheet = StyleSheet::default();
    assert_eq!(sheet.remove(StyleSlot::Hover).as_deref(), Some("hover:bg-gray-200"));
    assert_eq!(sheet.class(StyleSlot::Hover), None);
}
