//! Style resolution for datatable components.
//!
//! Components never hardcode presentation strings. Each styled part of a
//! component is a [`StyleSlot`], and at render time slots are resolved to
//! opaque class tokens through a [`StyleResolver`]. Swapping the resolver
//! restyles a component for a different styling convention without code
//! changes.
//!
//! # Example
//!
//! ```rust
//! use datatable::style::{StyleResolver, StyleSheet, StyleSlot};
//!
//! let sheet = StyleSheet::default()
//!     .with(StyleSlot::HeaderBackground, "bg-slate-900")
//!     .with(StyleSlot::Hover, "hover:bg-slate-700");
//!
//! assert_eq!(sheet.class(StyleSlot::HeaderBackground), Some("bg-slate-900"));
//! assert_eq!(sheet.class(StyleSlot::Table), Some("w-full"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Semantic slot a class token can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleSlot {
    /// Horizontal-scroll wrapper around the table.
    ResponsiveWrapper,
    Table,
    HeaderBackground,
    HeaderCell,
    RowBackground,
    AltRowBackground,
    BodyCell,
    ClickableRow,
    Hover,
    PaginationBar,
    EntriesLabel,
    PreviousButton,
    NextButton,
    AlignLeft,
    AlignCenter,
    AlignRight,
}

impl StyleSlot {
    /// Every slot, in declaration order.
    pub const ALL: [StyleSlot; 16] = [
        Self::ResponsiveWrapper,
        Self::Table,
        Self::HeaderBackground,
        Self::HeaderCell,
        Self::RowBackground,
        Self::AltRowBackground,
        Self::BodyCell,
        Self::ClickableRow,
        Self::Hover,
        Self::PaginationBar,
        Self::EntriesLabel,
        Self::PreviousButton,
        Self::NextButton,
        Self::AlignLeft,
        Self::AlignCenter,
        Self::AlignRight,
    ];
}

/// Trait for types that can resolve style slots to class tokens.
pub trait StyleResolver: Send + Sync + 'static {
    /// Resolve a slot to its class token.
    ///
    /// Returns `None` if the slot has no class in this resolver.
    fn class(&self, slot: StyleSlot) -> Option<&str>;
}

/// A table of slot -> class token.
///
/// `StyleSheet::default()` carries the Tailwind token set.
/// Sheets deserialize from JSON objects keyed by kebab-case slot name:
///
/// ```json
/// { "header-background": "bg-gray-50", "hover": "hover:bg-gray-200" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSheet {
    classes: HashMap<StyleSlot, String>,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::tailwind()
    }
}

impl StyleSheet {
    /// A sheet with no classes at all.
    pub fn unstyled() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// The default Tailwind class tokens.
    pub fn tailwind() -> Self {
        Self::unstyled()
            .with(StyleSlot::ResponsiveWrapper, "overflow-x-auto")
            .with(StyleSlot::Table, "w-full")
            .with(StyleSlot::HeaderBackground, "bg-gray-50")
            .with(
                StyleSlot::HeaderCell,
                "py-2 px-4 border-b border-gray-200 text-xs font-semibold text-gray-600 uppercase tracking-wider cursor-pointer",
            )
            .with(StyleSlot::RowBackground, "bg-white")
            .with(StyleSlot::AltRowBackground, "bg-gray-100")
            .with(StyleSlot::BodyCell, "py-2 px-4 border-b border-gray-200")
            .with(StyleSlot::ClickableRow, "cursor-pointer")
            .with(StyleSlot::Hover, "hover:bg-gray-200")
            .with(StyleSlot::PaginationBar, "mt-4 flex justify-between items-center")
            .with(StyleSlot::EntriesLabel, "text-xs text-gray-600")
            .with(
                StyleSlot::PreviousButton,
                "px-3 py-1 text-sm border rounded-l hover:bg-gray-200",
            )
            .with(
                StyleSlot::NextButton,
                "px-3 py-1 text-sm border-t border-b border-r rounded-r hover:bg-gray-200",
            )
            .with(StyleSlot::AlignLeft, "text-left")
            .with(StyleSlot::AlignCenter, "text-center")
            .with(StyleSlot::AlignRight, "text-right")
    }

    /// Set the class for a slot.
    pub fn with(mut self, slot: StyleSlot, class: impl Into<String>) -> Self {
        self.set(slot, class);
        self
    }

    /// Set the class for a slot.
    pub fn set(&mut self, slot: StyleSlot, class: impl Into<String>) {
        self.classes.insert(slot, class.into());
    }

    /// Remove the class for a slot.
    pub fn remove(&mut self, slot: StyleSlot) -> Option<String> {
        self.classes.remove(&slot)
    }

    /// Overlay `overrides` on this sheet, slot by slot.
    pub fn merged(mut self, overrides: StyleSheet) -> Self {
        self.classes.extend(overrides.classes);
        self
    }

    /// Number of slots with a class.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl StyleResolver for StyleSheet {
    fn class(&self, slot: StyleSlot) -> Option<&str> {
        self.classes.get(&slot).map(String::as_str)
    }
}
