//! Error type for archive bundle operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by archive handles and bundle inspection
///
/// The federated search layer matches on these variants to decide
/// whether a failure means "try the next archive" or "stop and report".
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Archive not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to open archive '{path}': {detail}")]
    OpenFailure { path: PathBuf, detail: String },

    #[error("Result index {index} is out of range for query '{query}'")]
    IndexOutOfRange { query: String, index: usize },

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Content unavailable for entry '{path}': {detail}")]
    ItemUnavailable { path: String, detail: String },

    #[error("Archive is closed")]
    Closed,

    #[error("Index error: {0}")]
    Index(String),
}

impl From<ArchiveError> for crate::core::error::ArkivoError {
    fn from(err: ArchiveError) -> Self {
        match err {
            ArchiveError::NotFound(path) => {
                crate::core::error::ArkivoError::NotFound(path.display().to_string())
            }
            other => crate::core::error::ArkivoError::StorageError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ArkivoError;

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err: ArkivoError = ArchiveError::NotFound(PathBuf::from("/data/missing")).into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_open_failure_maps_to_storage() {
        let err: ArkivoError = ArchiveError::OpenFailure {
            path: PathBuf::from("/data/broken"),
            detail: "corrupt index".to_string(),
        }
        .into();
        assert!(matches!(err, ArkivoError::StorageError(_)));
        assert!(err.message().contains("corrupt index"));
    }
}
