//! Column alignment and sort types.

use serde::{Deserialize, Serialize};
use tabledom::TextAlign;

use crate::style::StyleSlot;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Alignment for column `index`, or left when the list has no entry.
    pub fn for_column(alignments: &[Alignment], index: usize) -> Self {
        alignments.get(index).copied().unwrap_or_default()
    }

    /// The style slot carrying this alignment's class.
    pub fn style_slot(self) -> StyleSlot {
        match self {
            Self::Left => StyleSlot::AlignLeft,
            Self::Center => StyleSlot::AlignCenter,
            Self::Right => StyleSlot::AlignRight,
        }
    }
}

impl From<Alignment> for TextAlign {
    fn from(align: Alignment) -> Self {
        match align {
            Alignment::Left => TextAlign::Left,
            Alignment::Center => TextAlign::Center,
            Alignment::Right => TextAlign::Right,
        }
    }
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator shown next to the sorted column's label.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// The active sort key: a column index and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: usize,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: usize, direction: SortDirection) -> Self {
        Self { column, direction }
    }
}

/// Direction of a page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Previous,
    Next,
}

impl PageDirection {
    /// Page delta for this direction.
    pub fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}
