use thiserror::Error;

/// Convenience result type for frame operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Error type returned by frame operations and range ingestion.
///
/// Every variant carries the offending column name, bound or cell reference so callers can
/// diagnose a failure from the message alone.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The requested column is not present in the frame.
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    /// The ingestion range bounds are invalid for the supplied grid.
    #[error("malformed range: {message}")]
    MalformedRange { message: String },

    /// A row index reaches past the end of a column.
    #[error("row index {index} out of range for column '{column}' (len {len})")]
    RowIndexOutOfRange {
        column: String,
        index: usize,
        len: usize,
    },

    /// A value does not have the type an operation requires.
    #[error("type mismatch at row {row} column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        row: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// A cell reference (e.g. `A5`) could not be resolved to coordinates.
    #[error("invalid cell reference '{reference}': {message}")]
    InvalidCellRef { reference: String, message: String },

    /// The requested sheet does not exist in the grid source.
    #[error("sheet '{name}' not found")]
    SheetNotFound { name: String },

    /// The source cannot be read with the enabled features / detected format.
    #[error("unsupported source: {message}")]
    UnsupportedSource { message: String },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "excel")]
    /// Excel reader error (feature-gated behind `excel`).
    #[error("excel error: {0}")]
    Excel(#[from] calamine::Error),
}
