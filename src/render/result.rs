//! Extracted content: the line-oriented result of an extraction.

use serde::{Deserialize, Serialize};

/// Ordered lines produced from a document.
///
/// Paragraph lines come first, followed by one line per table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedContent {
    lines: Vec<String>,
}

impl ExtractedContent {
    /// Create content from lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The extracted lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines joined by a single `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// The first `max_chars` characters of the text, with `...` appended
    /// when the text was cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let text = self.to_text();
        match text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text,
        }
    }
}

impl std::fmt::Display for ExtractedContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<Vec<String>> for ExtractedContent {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(lines: &[&str]) -> ExtractedContent {
        lines.iter().map(|s| s.to_string()).collect::<Vec<_>>().into()
    }

    #[test]
    fn test_empty_content() {
        let c = ExtractedContent::default();
        assert!(c.is_empty());
        assert_eq!(c.to_text(), "");
    }

    #[test]
    fn test_to_text_keeps_empty_lines() {
        let c = content(&["Title", "", "Body text"]);
        assert_eq!(c.to_text(), "Title\n\nBody text");
        assert_eq!(c.to_string(), c.to_text());
    }

    #[test]
    fn test_preview_short_text_untouched() {
        let c = content(&["short"]);
        assert_eq!(c.preview(500), "short");
        assert_eq!(c.preview(5), "short");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let c = content(&["héllo wörld"]);
        assert_eq!(c.preview(4), "héll...");
        assert_eq!(c.preview(0), "...");
    }
}
