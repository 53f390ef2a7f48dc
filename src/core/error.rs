use thiserror::Error;

/// Error type definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    /// Index length does not match the length of the values it labels
    #[error("Index does not match data: index length {index_len}, data length {data_len}")]
    IndexMismatch { index_len: usize, data_len: usize },

    /// Referencing a column (or other key) that does not exist
    #[error("KeyError: {0} not found")]
    KeyNotFound(String),

    #[error("Invalid axis for method: {0}")]
    InvalidAxis(usize),

    #[error("MergeError: {0}")]
    Merge(String),

    #[error("Length mismatch: expected {expected}, actual {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Shape mismatch: expected {expected:?}, actual {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Type error: {0}")]
    Type(String),

    #[error("Cannot convert {from} to {to}")]
    UnsupportedConversion { from: String, to: String },

    #[error("Feature not implemented: {0}")]
    NotImplemented(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumnName(String),

    #[error("Index out of bounds: index {index}, size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    /// Shorthand for an index/data length mismatch
    pub(crate) fn index_mismatch(index_len: usize, data_len: usize) -> Self {
        Error::IndexMismatch {
            index_len,
            data_len,
        }
    }
}
