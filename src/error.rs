//! Error types for the courserank library.

use std::io;
use thiserror::Error;

/// Result type alias for courserank operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting or reporting survey data.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading the ZIP container.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required archive entry is missing.
    #[error("Missing archive entry: {0}")]
    MissingEntry(String),

    /// Invalid or malformed data in the workbook.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The worksheet does not follow the expected row layout.
    #[error("Worksheet layout error: {0}")]
    Layout(String),

    /// A cell referenced a shared string the pool does not contain.
    #[error("Shared string index {index} out of range (pool has {len} entries)")]
    SharedString { index: usize, len: usize },

    /// Error writing a CSV report.
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}
