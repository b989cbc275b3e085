//! Error types for schedule parsing.

/// Structural failure while reading a schedule payload.
///
/// Value-level problems (a non-numeric cell, a missing field) never produce this
/// error; they coerce to defaults instead. Only the overall shape of the input can
/// block a load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// CSV content without a header line and at least one data line.
    #[error("missing header or data")]
    MissingHeaderOrData,

    /// JSON content whose top-level value is not an array.
    #[error("invalid top-level shape")]
    InvalidTopLevelShape,

    /// Content that is not JSON at all.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// A file name or format tag that maps to neither CSV nor JSON.
    #[error("unsupported schedule format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for schedule parsing.
pub type FormatResult<T> = Result<T, FormatError>;
