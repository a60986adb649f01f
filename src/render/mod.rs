//! Rendering module for flattening documents into text and JSON.

mod json;
mod options;
mod result;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::{ExtractOptions, DEFAULT_CELL_DELIMITER};
pub use result::ExtractedContent;
pub use text::{to_lines, to_text};
