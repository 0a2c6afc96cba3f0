#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Markup tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    Div,
    Span,
    Table,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
    Button,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Table => "table",
            Self::Thead => "thead",
            Self::Tbody => "tbody",
            Self::Tr => "tr",
            Self::Th => "th",
            Self::Td => "td",
            Self::Button => "button",
        }
    }

    /// Tags whose children flow inline in plain-text output.
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Span | Self::Button | Self::Th | Self::Td)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
