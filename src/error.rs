//! Error types for docxtext library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docxtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// The source document could not be opened or parsed.
    #[error("Failed to open document {}: {source}", .path.display())]
    DocumentOpen {
        /// Path of the document (`<memory>` for in-memory input)
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: OpenError,
    },

    /// The extracted text could not be written to its destination.
    #[error("Failed to write output {}: {source}", .path.display())]
    OutputWrite {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Wrap an open failure with the path it happened on.
    pub fn document_open(path: impl Into<PathBuf>, source: impl Into<OpenError>) -> Self {
        Error::DocumentOpen {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Wrap a write failure with its destination path.
    pub fn output_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a document open failure.
    pub fn is_document_open(&self) -> bool {
        matches!(self, Error::DocumentOpen { .. })
    }

    /// Whether this is an output write failure.
    pub fn is_output_write(&self) -> bool {
        matches!(self, Error::OutputWrite { .. })
    }
}

/// Reasons a document fails to open.
#[derive(Error, Debug)]
pub enum OpenError {
    /// I/O error while reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The data is not a ZIP container.
    #[error("not a Word document container")]
    NotAContainer,

    /// The container is not a readable Word document.
    #[error("invalid Word document: {0}")]
    Format(String),
}

impl From<docx_rs::ReaderError> for OpenError {
    fn from(err: docx_rs::ReaderError) -> Self {
        OpenError::Format(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::document_open("missing.docx", OpenError::NotAContainer);
        assert_eq!(
            err.to_string(),
            "Failed to open document missing.docx: not a Word document container"
        );

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = Error::output_write("/out/result.txt", io_err);
        assert_eq!(
            err.to_string(),
            "Failed to write output /out/result.txt: denied"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = Error::document_open("a.docx", io_err);
        assert!(err.is_document_open());
        assert!(!err.is_output_write());
        assert!(matches!(
            err,
            Error::DocumentOpen {
                source: OpenError::Io(_),
                ..
            }
        ));
    }

    #[test]
    fn test_source_is_attached() {
        use std::error::Error as _;

        let err = Error::document_open("a.docx", OpenError::Format("bad xml".into()));
        let source = err.source().expect("source should be attached");
        assert_eq!(source.to_string(), "invalid Word document: bad xml");
    }
}
