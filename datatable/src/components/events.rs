//! Component event handling types and traits.

use tabledom::Element;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

/// Trait for components that handle clicks on their rendered elements.
///
/// The host renders a component to an element tree, finds the ID of the
/// element under the pointer, and hands both back here. Components resolve
/// the click target themselves so clicks bubble from inner elements (a
/// table cell) to the clickable element that owns them (the row).
pub trait ComponentEvents {
    /// Handle a click on the element with `element_id` inside `root`.
    fn on_click(&self, _root: &Element, _element_id: &str) -> EventResult {
        EventResult::Ignored
    }
}
