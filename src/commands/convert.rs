//! Convert command implementation
//!
//! Reads every Jekyll post, maps and normalizes its frontmatter, rewrites the
//! body and writes the result into the Docusaurus blog directory.

use crate::authors::{AuthorIndex, load_listing};
use crate::batch;
use crate::cli::ConvertArgs;
use crate::config::MigrationConfig;
use crate::error::Result;
use crate::operations::ConvertOperation;
use crate::ui;

use super::RunOptions;

/// Run convert command
pub fn run(config: &MigrationConfig, options: RunOptions, args: ConvertArgs) -> Result<()> {
    let posts = args.posts.unwrap_or_else(|| config.posts_path());
    let index = author_index(config)?;

    let discovery = batch::discover(&posts, &config.source_extensions)?;
    if discovery.is_empty() {
        println!("No posts found in {}.", posts.display());
        return Ok(());
    }

    let operation = ConvertOperation::new(config, &index, options.dry_run);
    let mut progress = ui::reporter(options.verbose);
    let report = batch::run(discovery, &operation, progress.as_mut());

    ui::summary::print_batch_summary(&report, "convert", options.dry_run);
    report.into_result().map(|_| ())
}

/// Name index built from the Jekyll author listing, when the site has one.
fn author_index(config: &MigrationConfig) -> Result<AuthorIndex> {
    let listing_path = config.source_authors_path();
    if !listing_path.is_file() {
        log::warn!(
            "No author listing at {}; author identifiers will be derived from names",
            listing_path.display()
        );
        return Ok(AuthorIndex::new());
    }
    let listing = load_listing(&listing_path)?;
    Ok(AuthorIndex::from_listing(&listing))
}
