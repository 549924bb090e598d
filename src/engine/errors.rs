use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error};

/// Contract violations on column access. These indicate a caller bug, not bad data.
#[derive(Debug, Error)]
pub enum ColumnError {
    #[error("Position {position} out of range for column {field} (len {len})")]
    OutOfRange {
        field: String,
        position: usize,
        len: usize,
    },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field {field} holds {found} values, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Field already defined: {0}")]
    DuplicateField(String),
}

/// Failures reading or writing persisted column and index resources.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing resource: {0}")]
    MissingResource(PathBuf),

    #[error("Corrupt resource {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to encode or parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    /// Maps `NotFound` to `MissingResource` so callers can tell a deleted file
    /// apart from a failing disk.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            StorageError::MissingResource(path)
        } else {
            StorageError::Io { path, source }
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        StorageError::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during query evaluation on either backend.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Column access failed: {0}")]
    Column(#[from] ColumnError),

    #[error("Storage access failed: {0}")]
    Storage(#[from] StorageError),

    #[error("No index built for field: {0}")]
    UnknownIndex(String),
}

impl QueryError {
    pub fn log_error(&self) {
        match self {
            QueryError::Column(e) => {
                error!("Column access failed: {}", e);
                debug!("Column error details: {:?}", e);
            }
            QueryError::Storage(e) => {
                error!("Storage access failed: {}", e);
                debug!("Storage error details: {:?}", e);
            }
            QueryError::UnknownIndex(field) => {
                error!("No index built for field: {}", field);
                debug!("Predicates may only name categorical fields that were indexed");
            }
        }
    }
}

/// Errors raised while turning raw weather rows into column values.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: expected at least {expected} fields, found {found}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row {row}: invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Row {row}: invalid number {value:?} for {field}")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Column setup failed: {0}")]
    Column(#[from] ColumnError),
}

impl IngestError {
    pub fn log_error(&self) {
        match self {
            IngestError::Csv(e) => {
                error!("CSV read failed: {}", e);
                debug!("CSV error details: {:?}", e);
            }
            IngestError::Column(e) => {
                error!("Column setup failed: {}", e);
                debug!("Column error details: {:?}", e);
            }
            other => {
                error!("Rejected input row: {}", other);
            }
        }
    }
}

/// Rejected matriculation numbers when deriving a scan plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Matriculation number {0:?} is too short, need at least 3 characters")]
    TooShort(String),

    #[error("Matriculation number {matric:?} has {found:?} at index {index}, expected a digit")]
    NotADigit {
        matric: String,
        index: usize,
        found: char,
    },
}
