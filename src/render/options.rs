//! Extraction options.

/// Delimiter placed between the cells of a table row.
pub const DEFAULT_CELL_DELIMITER: &str = " | ";

/// Options controlling how a document is flattened into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Text placed between cells of a table row
    pub cell_delimiter: String,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cell delimiter.
    pub fn with_cell_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.cell_delimiter = delimiter.into();
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            cell_delimiter: DEFAULT_CELL_DELIMITER.to_string(),
        }
    }
}
