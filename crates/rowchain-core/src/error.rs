use thiserror::Error;

use crate::types::CellKind;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse error taxonomy shared by every layer of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IndexOutOfRange,
    InvalidArgument,
    TypeMismatch,
    UnimplementedOperator,
    Schema,
    Config,
    Hash,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: CellKind, found: CellKind },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Hashing error: {0}")]
    Hash(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::Schema(_) => ErrorKind::Schema,
            Error::Config(_) => ErrorKind::Config,
            Error::Hash(_) => ErrorKind::Hash,
        }
    }

    pub(crate) fn mismatch(expected: CellKind, found: CellKind) -> Self {
        Error::TypeMismatch { expected, found }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Hash(e.to_string())
    }
}
