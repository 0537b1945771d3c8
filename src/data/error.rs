use thiserror::Error;

/// Errors raised while loading the launch dataset.
///
/// All of them are fatal at startup: the dashboard does not open without a
/// valid dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File missing or unreadable
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV (bad quoting, ragged rows, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unreadable Parquet file
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Arrow decoding error inside a Parquet record batch
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// A required column is absent from the header / schema
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    /// A cell could not be interpreted
    #[error("row {row}, column '{column}': invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    /// Structurally wrong file (e.g. JSON that is not an array of objects)
    #[error("malformed dataset: {0}")]
    Malformed(String),

    /// The file parsed but contained no launches
    #[error("dataset contains no launch records")]
    Empty,

    /// Unknown file extension
    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

/// Type alias for Results using DataLoadError
pub type Result<T> = std::result::Result<T, DataLoadError>;
