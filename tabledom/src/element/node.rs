use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{ClassList, Tag, TextAlign};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Visual
    pub classes: ClassList,
    /// Alignment hint for text renderers. Markup renderers rely on classes.
    pub text_align: Option<TextAlign>,

    // Interaction
    pub clickable: bool,
    /// Disabled elements don't receive clicks.
    pub disabled: bool,

    // Custom data storage (action names, indices)
    pub data: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            classes: ClassList::new(),
            text_align: None,
            clickable: false,
            disabled: false,
            data: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span(content: impl Into<String>) -> Self {
        Self::new(Tag::Span).text(content)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::Thead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::Tbody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th() -> Self {
        Self::new(Tag::Th)
    }

    pub fn td(content: impl Into<String>) -> Self {
        Self::new(Tag::Td).text(content)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(Tag::Button).text(label).clickable(true)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Content
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.content = Content::Text(content.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    // Visual
    pub fn class(mut self, token: impl AsRef<str>) -> Self {
        self.classes.push(token);
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.data.insert(key.into(), value.to_string());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// The element's own text, if its content is text.
    pub fn own_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}
