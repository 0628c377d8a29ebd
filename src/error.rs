//! Storage error types.
//!
//! The simulation itself has no failure modes; only the key/value backends
//! behind the best-time record can fail. Callers log these and carry on.

use std::fmt;

#[derive(Debug)]
pub enum StorageError {
    /// No backing store could be reached (e.g. `localStorage` disabled).
    Unavailable,

    /// Reading or writing the backing file failed.
    Io(std::io::Error),

    /// The backing file exists but is not a JSON object of strings.
    Format(serde_json::Error),

    /// The browser refused the operation (quota, privacy mode).
    Rejected {
        /// Stringified JS exception.
        reason: String,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Io(e) => write!(f, "storage i/o failed: {e}"),
            StorageError::Format(e) => write!(f, "storage file is malformed: {e}"),
            StorageError::Rejected { reason } => write!(f, "storage rejected the request: {reason}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Format(e)
    }
}
