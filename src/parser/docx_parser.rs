//! Word document parser using docx-rs.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::detect::check_container_bytes;
use crate::error::{Error, OpenError, Result};
use crate::model::{Document, Paragraph, Table, TableCell, TableRow};

/// Path reported for documents that did not come from a file.
pub(crate) const MEMORY_SOURCE: &str = "<memory>";

/// Word document parser.
///
/// Holds the decoded package; the source file handle is released as soon as
/// the bytes are read.
pub struct DocxParser {
    docx: docx_rs::Docx,
    source: PathBuf,
}

impl DocxParser {
    /// Open a Word document file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening {}", path.display());

        let data = read_file(path).map_err(|e| Error::document_open(path, e))?;
        Self::load(&data, path.to_path_buf())
    }

    /// Parse a Word document from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::load(data, PathBuf::from(MEMORY_SOURCE))
    }

    /// Parse a Word document from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| Error::document_open(MEMORY_SOURCE, e))?;
        Self::from_bytes(&data)
    }

    fn load(data: &[u8], source: PathBuf) -> Result<Self> {
        check_container_bytes(data).map_err(|e| Error::document_open(&source, e))?;

        let docx = docx_rs::read_docx(data)
            .map_err(|e| Error::document_open(&source, OpenError::from(e)))?;

        Ok(Self { docx, source })
    }

    /// Lower the package into the document model.
    pub fn parse(&self) -> Result<Document> {
        let mut doc = Document::new();

        for child in &self.docx.document.children {
            match child {
                docx_rs::DocumentChild::Paragraph(p) => {
                    doc.add_paragraph(convert_paragraph(p));
                }
                docx_rs::DocumentChild::Table(t) => {
                    doc.add_table(convert_table(t));
                }
                _ => {}
            }
        }

        log::debug!(
            "parsed {}: {} paragraphs, {} tables",
            self.source.display(),
            doc.paragraphs.len(),
            doc.tables.len()
        );

        Ok(doc)
    }
}

fn read_file(path: &Path) -> std::result::Result<Vec<u8>, OpenError> {
    let mut file = File::open(path)?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

fn convert_paragraph(p: &docx_rs::Paragraph) -> Paragraph {
    let mut paragraph = Paragraph::new();
    collect_paragraph_children(&p.children, &mut paragraph);
    paragraph
}

fn collect_paragraph_children(children: &[docx_rs::ParagraphChild], out: &mut Paragraph) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => collect_run(run, out),
            docx_rs::ParagraphChild::Hyperlink(link) => {
                collect_paragraph_children(&link.children, out);
            }
            _ => {}
        }
    }
}

fn collect_run(run: &docx_rs::Run, out: &mut Paragraph) {
    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(t) => out.push_str(&t.text),
            docx_rs::RunChild::Tab(_) | docx_rs::RunChild::PTab(_) => out.push('\t'),
            docx_rs::RunChild::CarriageReturn(_) => out.push('\n'),
            docx_rs::RunChild::Break(br) => out.push_str(break_text(br)),
            _ => {}
        }
    }
}

/// Text wrapping breaks are line breaks; page and column breaks add nothing.
fn break_text(br: &docx_rs::Break) -> &'static str {
    let kind = serde_json::to_value(br)
        .ok()
        .and_then(|v| first_str(&v).map(str::to_ascii_lowercase));

    match kind.as_deref() {
        Some("page") | Some("column") => "",
        _ => "\n",
    }
}

fn first_str(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map.values().find_map(first_str),
        _ => None,
    }
}

/// Grid span and vertical merge state of a cell.
///
/// docx-rs keeps these properties private, so they are read back from the
/// serialized form (`gridSpan`, `verticalMerge`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellLayout {
    grid_span: usize,
    continues_merge: bool,
}

impl CellLayout {
    fn of(property: &docx_rs::TableCellProperty) -> Self {
        let value = serde_json::to_value(property).unwrap_or(Value::Null);

        let grid_span = value
            .get("gridSpan")
            .and_then(|v| v.as_u64().or_else(|| v.get("val").and_then(Value::as_u64)))
            .map_or(1, |n| n.max(1) as usize);

        let continues_merge = value
            .get("verticalMerge")
            .and_then(|v| v.as_str().or_else(|| v.get("val").and_then(Value::as_str)))
            .is_some_and(|s| s.eq_ignore_ascii_case("continue"));

        Self {
            grid_span,
            continues_merge,
        }
    }
}

/// Rows are laid out on the table grid: a spanning cell repeats once per
/// grid column, and a vertical merge continuation takes the cell above it.
fn convert_table(table: &docx_rs::Table) -> Table {
    let mut out = Table::new();

    for row in &table.rows {
        let docx_rs::TableChild::TableRow(tr) = row;
        let above = out.rows.last().map_or(&[][..], |r| r.cells.as_slice());
        let mut cells: Vec<TableCell> = Vec::new();

        for cell in &tr.cells {
            let docx_rs::TableRowChild::TableCell(tc) = cell;
            let layout = CellLayout::of(&tc.property);

            let merged = if layout.continues_merge {
                above.get(cells.len()).cloned()
            } else {
                None
            };
            let cell = merged.unwrap_or_else(|| convert_cell(tc));

            cells.extend(std::iter::repeat(cell).take(layout.grid_span));
        }

        out.add_row(TableRow::new(cells));
    }

    out
}

fn convert_cell(cell: &docx_rs::TableCell) -> TableCell {
    let mut paragraphs = Vec::new();

    for content in &cell.children {
        match content {
            docx_rs::TableCellContent::Paragraph(p) => paragraphs.push(convert_paragraph(p)),
            docx_rs::TableCellContent::Table(_) => {
                log::warn!("nested table inside a cell is not included in cell text");
            }
            _ => {}
        }
    }

    TableCell::with_content(paragraphs)
}
