//! Frontmatter errors

use super::MigrateError;

/// Creates a missing frontmatter error
pub fn missing(path: impl Into<String>) -> MigrateError {
    MigrateError::NoFrontmatter { path: path.into() }
}

/// Creates a malformed frontmatter error carrying the YAML parser's message
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> MigrateError {
    MigrateError::MalformedFrontmatter {
        path: path.into(),
        reason: reason.into(),
    }
}
