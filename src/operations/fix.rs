//! Normalize a Docusaurus post in place.

use std::path::Path;

use super::{DocumentOperation, Processed, commit, render};
use crate::authors::AuthorIndex;
use crate::common::fs::read_to_string;
use crate::config::MigrationConfig;
use crate::error::Result;
use crate::frontmatter::decode;
use crate::normalize::normalize_frontmatter;
use crate::rewrite::RewriteContext;

/// Re-encodes every post in place. A second run over its own output changes
/// nothing.
pub struct FixOperation<'a> {
    config: &'a MigrationConfig,
    index: &'a AuthorIndex,
    dry_run: bool,
}

impl<'a> FixOperation<'a> {
    pub fn new(config: &'a MigrationConfig, index: &'a AuthorIndex, dry_run: bool) -> Self {
        Self {
            config,
            index,
            dry_run,
        }
    }
}

impl DocumentOperation for FixOperation<'_> {
    fn name(&self) -> &'static str {
        "fix"
    }

    fn process(&self, path: &Path) -> Result<Processed> {
        let content = read_to_string(path)?;
        let mut document = decode(&content).map_err(|e| e.at(path))?;

        let normalized = normalize_frontmatter(&mut document.frontmatter, self.index);
        log::debug!("{}: normalized {normalized:?}", path.display());

        let ctx = RewriteContext {
            config: self.config,
            document_dir: path.parent().unwrap_or(Path::new(".")),
            copy_assets: !self.dry_run,
        };
        let (output, report) = render(path, &document.frontmatter, &document.body, &ctx)?;

        let changed = commit(path, &output, self.dry_run)?;
        if changed {
            log::info!("Updated: {}", path.display());
        } else {
            log::debug!("Unchanged: {}", path.display());
        }

        Ok(Processed {
            target: path.to_path_buf(),
            changed,
            warnings: report.warnings,
        })
    }
}
