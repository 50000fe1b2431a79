//! Error types for the grading pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for grading pipeline operations.
pub type Result<T> = std::result::Result<T, GradingError>;

/// Everything that can stop a grading run.
///
/// Variants are listed in detection priority: an unreadable source is found
/// before any line is parsed, and within a line the field count is checked
/// before the id, and the id before the score.
#[derive(Debug, Error)]
pub enum GradingError {
    /// The input file does not exist.
    #[error("input file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// The line did not split into exactly three comma-separated fields.
    #[error("Missing fields in line: {line}")]
    MissingField { line: String },

    /// The first field is not an integer.
    #[error("Invalid ID format: {text}")]
    MalformedId { text: String },

    /// The third field is not an integer.
    #[error("Invalid score format: {text}")]
    InvalidScoreFormat { text: String },

    /// Any other I/O failure, e.g. an unwritable destination.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GradingError {
    /// True for the errors raised by a malformed input line.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::MalformedId { .. } | Self::InvalidScoreFormat { .. }
        )
    }
}
