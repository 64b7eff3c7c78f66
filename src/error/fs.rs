//! File system errors

use std::path::Path;

use super::MigrateError;

/// Creates a file read error for `path`
pub fn read_failed(path: &Path, err: &std::io::Error) -> MigrateError {
    MigrateError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error for `path`
pub fn write_failed(path: &Path, err: &std::io::Error) -> MigrateError {
    MigrateError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a write error for content that could not be serialized for `path`
pub fn serialize_failed(path: &Path, err: impl std::fmt::Display) -> MigrateError {
    MigrateError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> MigrateError {
    MigrateError::IoError {
        message: message.into(),
    }
}

/// Creates an error for a second document mapping onto an already written target
pub fn output_conflict(target: &Path, first: &Path) -> MigrateError {
    MigrateError::OutputConflict {
        target: target.display().to_string(),
        first: first.display().to_string(),
    }
}
