//! Word document container detection.
//!
//! A `.docx` file is an OOXML package, which is a ZIP archive. Detection only
//! checks the ZIP local file header; whether the archive is actually a Word
//! document is decided by the reader.

use crate::error::OpenError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Check the container header of a file.
///
/// # Example
/// ```no_run
/// use docxtext::detect::check_container_path;
///
/// check_container_path("document.docx").unwrap();
/// ```
pub fn check_container_path<P: AsRef<Path>>(path: P) -> std::result::Result<(), OpenError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    match reader.read_exact(&mut header) {
        Ok(()) => check_container_bytes(&header),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Err(OpenError::NotAContainer),
        Err(e) => Err(OpenError::Io(e)),
    }
}

/// Check that data starts with a ZIP local file header.
pub fn check_container_bytes(data: &[u8]) -> std::result::Result<(), OpenError> {
    if data.starts_with(ZIP_MAGIC) {
        Ok(())
    } else {
        Err(OpenError::NotAContainer)
    }
}

/// Check if a file looks like a Word document container.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    check_container_path(path).is_ok()
}

/// Check if bytes look like a Word document container.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    check_container_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_zip_header() {
        assert!(is_docx_bytes(b"PK\x03\x04\x14\x00\x06\x00"));
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = check_container_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(OpenError::NotAContainer)));
    }

    #[test]
    fn test_detect_too_short() {
        assert!(!is_docx_bytes(b"PK"));
        assert!(!is_docx_bytes(b""));
    }

    #[test]
    fn test_detect_missing_file() {
        let result = check_container_path("/nonexistent/dir/file.docx");
        assert!(matches!(result, Err(OpenError::Io(_))));
    }
}
