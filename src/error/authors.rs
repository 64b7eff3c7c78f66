//! Author listing errors

use super::MigrateError;

/// Creates an author listing parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> MigrateError {
    MigrateError::AuthorsParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
