//! Command implementations for the Blogshift CLI

pub mod authors;
pub mod completions;
pub mod convert;
pub mod fix;
pub mod version;

use std::path::{Path, PathBuf};

use crate::config::MigrationConfig;
use crate::error::{Result, fs};

/// Flags every batch command honours
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub verbose: bool,
    pub dry_run: bool,
}

/// Configuration for this invocation: file (or defaults) plus root overrides.
pub fn load_config(
    path: Option<&Path>,
    source: Option<PathBuf>,
    target: Option<PathBuf>,
) -> Result<MigrationConfig> {
    let cwd = std::env::current_dir()
        .map_err(|e| fs::io_error(format!("Failed to get current directory: {e}")))?;
    let config = MigrationConfig::load(path, &cwd)?.with_roots(source, target);
    log::debug!(
        "Source root {}, target root {}",
        config.source_root.display(),
        config.target_root.display()
    );
    Ok(config)
}
