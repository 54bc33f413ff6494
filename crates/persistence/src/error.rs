use std::path::PathBuf;

use stockroom_core::DomainError;
use thiserror::Error;

/// Why a file's contents are not a valid inventory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed inventory data: {0}")]
    Malformed(String),

    #[error("not an inventory file (format `{0}`)")]
    UnknownFormat(String),

    #[error("unsupported format version {0}")]
    UnsupportedVersion(u32),

    #[error("empty {field} in record {index}")]
    EmptyField { field: &'static str, index: usize },

    #[error("invalid price for record {index}")]
    InvalidPrice { index: usize },

    #[error("record rejected: {0}")]
    Rejected(#[from] DomainError),
}

/// Save/load failure.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("corrupt inventory file {}: {source}", .path.display())]
    CorruptFormat { path: PathBuf, source: DecodeError },
}

impl PersistenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            PersistenceError::FileNotFound(path) => path,
            PersistenceError::Io { path, .. } => path,
            PersistenceError::CorruptFormat { path, .. } => path,
        }
    }
}
