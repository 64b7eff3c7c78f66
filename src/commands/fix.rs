//! Fix command implementation
//!
//! Normalizes an existing Docusaurus blog in place.

use crate::authors::AuthorIndex;
use crate::batch;
use crate::cli::FixArgs;
use crate::config::MigrationConfig;
use crate::error::Result;
use crate::operations::FixOperation;
use crate::ui;

use super::RunOptions;

/// Run fix command
pub fn run(config: &MigrationConfig, options: RunOptions, args: FixArgs) -> Result<()> {
    let dir = args.dir.unwrap_or_else(|| config.blog_path());
    let index = author_index(config)?;
    if index.is_empty() {
        log::info!("No Docusaurus authors found; identifiers will be derived from names");
    } else {
        log::debug!("Author index holds {} names", index.len());
    }

    let discovery = batch::discover(&dir, &config.target_extensions)?;
    if discovery.is_empty() {
        println!("No posts found in {}.", dir.display());
        return Ok(());
    }

    let operation = FixOperation::new(config, &index, options.dry_run);
    let mut progress = ui::reporter(options.verbose);
    let report = batch::run(discovery, &operation, progress.as_mut());

    ui::summary::print_batch_summary(&report, "fix", options.dry_run);
    report.into_result().map(|_| ())
}

/// Name index from the Docusaurus authors: the `authors.yml` registry when
/// present, else the per-author JSON directory, else empty.
fn author_index(config: &MigrationConfig) -> Result<AuthorIndex> {
    let registry = config.authors_registry_path();
    if registry.is_file() {
        return AuthorIndex::load_registry_file(&registry);
    }
    AuthorIndex::load(&config.authors_dir_path())
}
