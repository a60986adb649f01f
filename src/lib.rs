//! # docxtext
//!
//! Text extraction from Word (`.docx`) documents.
//!
//! A document is flattened into lines: every top-level paragraph first, in
//! document order, then one line per table row with the cell texts joined by
//! `" | "`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docxtext::{extract, extract_to_file};
//!
//! fn main() -> docxtext::Result<()> {
//!     let content = extract("document.docx")?;
//!     println!("{}", content.to_text());
//!
//!     // Or extract and write in one step
//!     extract_to_file("document.docx", "document.txt")?;
//!     Ok(())
//! }
//! ```
//!
//! The OOXML container itself is read by `docx-rs`.

pub mod detect;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{is_docx, is_docx_bytes};
pub use error::{Error, OpenError, Result};
pub use model::{Document, DocumentStats, Paragraph, Table, TableCell, TableRow};
pub use parser::DocxParser;
pub use render::{ExtractOptions, ExtractedContent, JsonFormat, DEFAULT_CELL_DELIMITER};

use std::io::Read;
use std::path::Path;

/// Parse a Word document file into the document model.
///
/// # Example
///
/// ```no_run
/// let doc = docxtext::parse_file("document.docx").unwrap();
/// println!("Tables: {}", doc.tables.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocxParser::open(path)?.parse()
}

/// Parse a Word document from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    DocxParser::from_bytes(data)?.parse()
}

/// Extract the text lines of a Word document file.
///
/// Fails with [`Error::DocumentOpen`] if the file is missing, unreadable or
/// not a Word document.
///
/// # Example
///
/// ```no_run
/// let content = docxtext::extract("document.docx").unwrap();
/// for line in content.lines() {
///     println!("{}", line);
/// }
/// ```
pub fn extract<P: AsRef<Path>>(path: P) -> Result<ExtractedContent> {
    Extractor::new().extract(path)
}

/// Extract the text lines of a Word document held in memory.
pub fn extract_bytes(data: &[u8]) -> Result<ExtractedContent> {
    Extractor::new().extract_bytes(data)
}

/// Extract the text lines of a Word document read from `reader`.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
///
/// let file = File::open("document.docx").unwrap();
/// let content = docxtext::extract_reader(file).unwrap();
/// ```
pub fn extract_reader<R: Read>(reader: R) -> Result<ExtractedContent> {
    Extractor::new().extract_reader(reader)
}

/// Extract a Word document and write its text to `output`.
///
/// The output is only replaced once the whole text has been written; on any
/// failure the destination is left untouched.
pub fn extract_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<ExtractedContent> {
    Extractor::new().extract_to_file(input, output)
}

/// Builder for extracting Word documents with custom options.
///
/// # Example
///
/// ```no_run
/// use docxtext::Extractor;
///
/// let text = Extractor::new()
///     .with_cell_delimiter("\t")
///     .extract("document.docx")?
///     .to_text();
/// # Ok::<(), docxtext::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create a new extractor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Set the text placed between table cells.
    pub fn with_cell_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options = self.options.with_cell_delimiter(delimiter);
        self
    }

    /// The options in use.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract a Word document file.
    pub fn extract<P: AsRef<Path>>(&self, path: P) -> Result<ExtractedContent> {
        let doc = parse_file(path)?;
        Ok(self.render(&doc))
    }

    /// Extract a Word document from bytes.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<ExtractedContent> {
        let doc = parse_bytes(data)?;
        Ok(self.render(&doc))
    }

    /// Extract a Word document from a reader.
    pub fn extract_reader<R: Read>(&self, reader: R) -> Result<ExtractedContent> {
        let doc = DocxParser::from_reader(reader)?.parse()?;
        Ok(self.render(&doc))
    }

    /// Extract a Word document file and write the text to `output`.
    pub fn extract_to_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ExtractedContent> {
        let content = self.extract(input)?;
        crate::output::write_atomic(output, &content.to_text())?;
        Ok(content)
    }

    /// Flatten an already parsed document.
    pub fn render(&self, doc: &Document) -> ExtractedContent {
        render::to_lines(doc, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_builder() {
        let extractor = Extractor::new().with_cell_delimiter(", ");
        assert_eq!(extractor.options().cell_delimiter, ", ");
    }

    #[test]
    fn test_extractor_default_delimiter() {
        let extractor = Extractor::default();
        assert_eq!(extractor.options().cell_delimiter, DEFAULT_CELL_DELIMITER);
    }

    #[test]
    fn test_extract_bytes_empty_data() {
        let data: [u8; 0] = [];
        let result = extract_bytes(&data);
        assert!(matches!(result, Err(Error::DocumentOpen { .. })));
    }

    #[test]
    fn test_extract_bytes_zip_header_only() {
        // Valid magic, but no archive behind it
        let result = extract_bytes(b"PK\x03\x04garbage");
        assert!(matches!(
            result,
            Err(Error::DocumentOpen {
                source: OpenError::Format(_),
                ..
            })
        ));
    }

    #[test]
    fn test_extract_missing_file() {
        let result = extract("/nonexistent/path/to/file.docx");
        assert!(result.unwrap_err().is_document_open());
    }

    #[test]
    fn test_render_parsed_document() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Intro"));
        doc.add_table(Table::from_rows([["k", "v"]]));

        let content = Extractor::new().render(&doc);
        assert_eq!(content.to_text(), "Intro\nk | v");
    }
}
