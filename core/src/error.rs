use std::path::Path;
use thiserror::Error;

/// Result type for mammolink operations
pub type Result<T> = std::result::Result<T, MammolinkError>;

/// Error types for mammolink operations
///
/// Only the I/O boundary can fail; every linkage stage absorbs bad values
/// into empty fields instead.
#[derive(Error, Debug)]
pub enum MammolinkError {
    /// Required input table not found
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Malformed CSV content
    #[error("CSV error in {file}: {message}")]
    CsvError { file: String, message: String },

    /// Output serialization error
    #[error("Output error: {0}")]
    OutputError(String),

    /// Input present but unusable for a run
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl MammolinkError {
    /// Wraps a CSV error with the file it came from
    pub fn csv(path: &Path, e: csv::Error) -> Self {
        MammolinkError::CsvError {
            file: path.display().to_string(),
            message: e.to_string(),
        }
    }
}

// Helper conversions
impl From<String> for MammolinkError {
    fn from(s: String) -> Self {
        MammolinkError::InvalidInput(s)
    }
}

impl From<&str> for MammolinkError {
    fn from(s: &str) -> Self {
        MammolinkError::InvalidInput(s.to_string())
    }
}

/// For the output writer only; input readers go through [`MammolinkError::csv`]
/// so the error names the file it came from.
impl From<csv::Error> for MammolinkError {
    fn from(e: csv::Error) -> Self {
        MammolinkError::OutputError(format!("{}", e))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for MammolinkError {
    fn from(e: serde_json::Error) -> Self {
        MammolinkError::OutputError(format!("{}", e))
    }
}
