//! Document model types for Word document content.
//!
//! The parser lowers a `docx-rs` document into these types; rendering only
//! ever sees this model.

mod document;
mod paragraph;
mod table;

pub use document::{Document, DocumentStats};
pub use paragraph::Paragraph;
pub use table::{Table, TableCell, TableRow};
