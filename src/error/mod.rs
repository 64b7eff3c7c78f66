//! Error types and handling for blogshift
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`frontmatter`]: Document frontmatter errors
//! - [`authors`]: Author listing errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//!
//! Every document-level error is file-scoped: the batch driver records it and
//! moves on. Only [`MigrateError::BatchIncomplete`] and configuration errors
//! end a command.

pub mod authors;
pub mod config;
pub mod frontmatter;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for blogshift operations
#[derive(Error, Diagnostic, Debug)]
pub enum MigrateError {
    // Frontmatter errors
    #[error("No frontmatter found in {path}")]
    #[diagnostic(
        code(blogshift::frontmatter::missing),
        help("Documents must start with a '---' line, a YAML block and a closing '---' line")
    )]
    NoFrontmatter { path: String },

    #[error("Malformed frontmatter in {path}: {reason}")]
    #[diagnostic(code(blogshift::frontmatter::malformed))]
    MalformedFrontmatter { path: String, reason: String },

    // Asset errors
    #[error("Image not found: {path}")]
    #[diagnostic(
        code(blogshift::asset::missing),
        severity(Warning),
        help("The reference is rewritten anyway; copy the image into the asset directory by hand")
    )]
    MissingAsset { path: String },

    // Output errors
    #[error("Output {target} was already written from {first}")]
    #[diagnostic(
        code(blogshift::output::conflict),
        help("Give one of the posts a distinct 'permalink' or 'slug'")
    )]
    OutputConflict { target: String, first: String },

    // Author errors
    #[error("Failed to parse author listing: {path}: {reason}")]
    #[diagnostic(
        code(blogshift::authors::parse_failed),
        help("Author listings map display names to {{name, bio, avatar, links}}")
    )]
    AuthorsParseFailed { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(blogshift::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(blogshift::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(blogshift::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(blogshift::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(blogshift::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(blogshift::fs::io_error))]
    IoError { message: String },

    // Batch errors
    #[error("{failed} of {total} files failed")]
    #[diagnostic(
        code(blogshift::batch::incomplete),
        help("Run again with --verbose to see the cause logged for each file")
    )]
    BatchIncomplete { failed: usize, total: usize },
}

impl From<std::io::Error> for MigrateError {
    fn from(err: std::io::Error) -> Self {
        MigrateError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MigrateError>;
