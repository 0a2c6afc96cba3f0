pub mod element;
pub mod hit;
pub mod render;
pub mod types;

pub use element::{find_by_text, find_element, text_content, Content, Element};
pub use hit::{clickable_target, path_to};
pub use render::{to_html, to_text};
pub use types::*;
