//! Serializers for element trees.
//!
//! - [`html`] produces escaped markup with class, id, data and disabled
//!   attributes, for hosts that render HTML.
//! - [`text`] produces a plain-text rendition for terminals and logs, with
//!   tables laid out as an aligned grid.

pub mod html;
pub mod text;

pub use html::to_html;
pub use text::to_text;
