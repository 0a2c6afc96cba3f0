use std::fmt;

/// Ordered list of opaque class tokens attached to an element.
///
/// Empty tokens are dropped on insert, so callers can push optional classes
/// without checking them first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: impl AsRef<str>) {
        let token = token.as_ref().trim();
        if !token.is_empty() {
            self.0.push(token.to_string());
        }
    }

    pub fn with(mut self, token: impl AsRef<str>) -> Self {
        self.push(token);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Whether `class` appears as a whole word in any token.
    ///
    /// Tokens may themselves hold several space-separated classes
    /// (`"py-2 px-4"`), so this checks individual words.
    pub fn contains(&self, class: &str) -> bool {
        self.0
            .iter()
            .flat_map(|token| token.split_whitespace())
            .any(|word| word == class)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ClassList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for token in iter {
            list.push(token);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tokens_are_dropped() {
        let list: ClassList = ["bg-white", "", "  ", "cursor-pointer"].into_iter().collect();
        assert_eq!(list.len(), 2);
        assert_eq!(list.to_string(), "bg-white cursor-pointer");
    }

    #[test]
    fn contains_matches_words_inside_tokens() {
        let list = ClassList::new().with("py-2 px-4 border-b");
        assert!(list.contains("px-4"));
        assert!(!list.contains("px"));
    }
}
