//! Error types for the pdfocr pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a PDF to page-indexed OCR text.
///
/// Every variant except [`PdfOcrError::Recognition`] is fatal: it aborts the
/// run before any output file is written. `Recognition` is raised per page,
/// recovered by the orchestrator and recorded inline as an `[ERROR]` marker
/// in the output.
#[derive(Debug, Error)]
pub enum PdfOcrError {
    /// Input PDF path does not exist
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// The OCR engine binary could not be located
    #[error("OCR engine not installed or not found: {0}")]
    EngineMissing(String),

    /// Requested language pack is not installed in the OCR engine
    #[error("language '{0}' is not installed")]
    UnsupportedLanguage(String),

    /// PDF could not be parsed or rendered to images
    #[error("failed to convert PDF to images: {0}")]
    Conversion(String),

    /// Conversion succeeded but produced zero pages
    #[error("PDF contains no pages or could not be converted")]
    EmptyDocument,

    /// Recognition failed for a single page (non-fatal)
    #[error("OCR failed: {0}")]
    Recognition(String),

    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination path that could not be written
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for pdfocr operations
pub type Result<T> = std::result::Result<T, PdfOcrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PdfOcrError::FileNotFound(PathBuf::from("missing.pdf"));
        assert_eq!(err.to_string(), "file not found: missing.pdf");

        let err = PdfOcrError::UnsupportedLanguage("xyz".to_string());
        assert_eq!(err.to_string(), "language 'xyz' is not installed");

        let err = PdfOcrError::EmptyDocument;
        assert!(err.to_string().contains("no pages"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: PdfOcrError = io_err.into();
        assert!(matches!(err, PdfOcrError::Io(_)));
    }
}
