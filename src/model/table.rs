//! Table types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in the table
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows of cell text.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(TableRow::from_strings).collect(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).sum()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Join the cell texts of this row with `delimiter`.
    pub fn joined(&self, delimiter: &str) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content (paragraphs)
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Create a new cell with a single paragraph of text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::with_text(text)],
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a cell with multiple paragraphs.
    pub fn with_content(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Get the cell text: paragraph texts joined by newlines.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.cell_count(), 0);
    }

    #[test]
    fn test_table_with_data() {
        let table = Table::from_rows([["Name", "Age"], ["Alice", "30"], ["Bob", "25"]]);

        assert_eq!(table.row_count(), 3);
        assert!(table.rows.iter().all(|r| r.cells.len() == 2));
        assert_eq!(table.cell_count(), 6);
    }

    #[test]
    fn test_row_joined() {
        let row = TableRow::from_strings(["a", "", "c"]);
        assert_eq!(row.joined(" | "), "a |  | c");
    }

    #[test]
    fn test_cell_text_joins_paragraphs() {
        let cell = TableCell::with_content(vec![
            Paragraph::with_text("first"),
            Paragraph::with_text("second"),
        ]);
        assert_eq!(cell.plain_text(), "first\nsecond");
        assert_eq!(TableCell::empty().plain_text(), "");
    }
}
