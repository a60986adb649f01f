//! Paragraph type.

use serde::{Deserialize, Serialize};

/// A top-level block of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text; tabs and breaks are kept as `\t` and `\n`
    pub text: String,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Append text to the paragraph.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append a single character.
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Get the paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the paragraph has no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_building() {
        let mut p = Paragraph::new();
        assert!(p.is_empty());

        p.push_str("Hello");
        p.push('\t');
        p.push_str("world");
        assert_eq!(p.text(), "Hello\tworld");
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let p = Paragraph::with_text("  ");
        assert!(!p.is_empty());
    }
}
