//! Plain text rendering for Word documents.

use crate::model::Document;

use super::{ExtractOptions, ExtractedContent};

/// Flatten a document into lines.
///
/// Every paragraph becomes one line, verbatim. Then every row of every table,
/// in document order, becomes one line of cell texts joined by the configured
/// delimiter.
pub fn to_lines(doc: &Document, options: &ExtractOptions) -> ExtractedContent {
    let mut lines = Vec::with_capacity(doc.line_count());

    lines.extend(doc.paragraphs.iter().map(|p| p.text.clone()));

    for table in &doc.tables {
        lines.extend(
            table
                .rows
                .iter()
                .map(|row| row.joined(&options.cell_delimiter)),
        );
    }

    ExtractedContent::new(lines)
}

/// Convert a document to newline-joined plain text.
pub fn to_text(doc: &Document, options: &ExtractOptions) -> String {
    to_lines(doc, options).to_text()
}
