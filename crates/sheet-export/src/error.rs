// File: crates/sheet-export/src/error.rs
// Summary: Error type for workbook serialization.

use thiserror::Error;

/// Errors raised while writing a workbook document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The written bytes were not UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The output sink failed while an XML event was written.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
