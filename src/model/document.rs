//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A parsed Word document: top-level paragraphs and tables in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level paragraphs
    pub paragraphs: Vec<Paragraph>,

    /// Top-level tables
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Check if the document has neither paragraphs nor tables.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Total number of table rows across all tables.
    pub fn row_count(&self) -> usize {
        self.tables.iter().map(Table::row_count).sum()
    }

    /// Number of lines an extraction of this document produces.
    pub fn line_count(&self) -> usize {
        self.paragraphs.len() + self.row_count()
    }

    /// Collect structural statistics.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            paragraphs: self.paragraphs.len(),
            tables: self.tables.len(),
            rows: self.row_count(),
            cells: self.tables.iter().map(Table::cell_count).sum(),
        }
    }
}

/// Structural counts for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Number of top-level paragraphs
    pub paragraphs: usize,
    /// Number of top-level tables
    pub tables: usize,
    /// Number of rows across all tables
    pub rows: usize,
    /// Number of cells across all tables
    pub cells: usize,
}
