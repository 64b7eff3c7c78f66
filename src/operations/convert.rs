//! Convert a Jekyll post into a Docusaurus blog post.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::{DocumentOperation, Processed, commit, render};
use crate::authors::AuthorIndex;
use crate::common::fs::read_to_string;
use crate::config::MigrationConfig;
use crate::error::{Result, fs};
use crate::frontmatter::decode;
use crate::normalize::jekyll::{map_fields, output_file_name};
use crate::normalize::normalize_frontmatter;
use crate::rewrite::RewriteContext;

/// Writes each source post to the target blog directory; sources are only
/// read.
///
/// Each target is claimed by the first source that maps onto it. A later
/// source with the same `<date>-<slug>.md` fails instead of overwriting it.
pub struct ConvertOperation<'a> {
    config: &'a MigrationConfig,
    index: &'a AuthorIndex,
    dry_run: bool,
    today: NaiveDate,
    /// target -> source it was written from
    claimed: RefCell<HashMap<PathBuf, PathBuf>>,
}

impl<'a> ConvertOperation<'a> {
    pub fn new(config: &'a MigrationConfig, index: &'a AuthorIndex, dry_run: bool) -> Self {
        Self {
            config,
            index,
            dry_run,
            today: chrono::Local::now().date_naive(),
            claimed: RefCell::new(HashMap::new()),
        }
    }

    fn claim(&self, target: &Path, source: &Path) -> Result<()> {
        let mut claimed = self.claimed.borrow_mut();
        match claimed.get(target) {
            Some(first) if first != source => Err(fs::output_conflict(target, first)),
            _ => {
                claimed.insert(target.to_path_buf(), source.to_path_buf());
                Ok(())
            }
        }
    }

    /// Fix the date used for posts without one.
    #[cfg(test)]
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

impl DocumentOperation for ConvertOperation<'_> {
    fn name(&self) -> &'static str {
        "convert"
    }

    fn process(&self, source: &Path) -> Result<Processed> {
        let content = read_to_string(source)?;
        let document = decode(&content).map_err(|e| e.at(source))?;

        let mut frontmatter = map_fields(&document.frontmatter, &self.config.drop_fields);
        let normalized = normalize_frontmatter(&mut frontmatter, self.index);
        log::debug!("{}: normalized {normalized:?}", source.display());

        let ctx = RewriteContext {
            config: self.config,
            document_dir: source.parent().unwrap_or(Path::new(".")),
            copy_assets: !self.dry_run,
        };
        let (output, report) = render(source, &frontmatter, &document.body, &ctx)?;

        let target = self
            .config
            .blog_path()
            .join(output_file_name(&frontmatter, source, self.today));
        self.claim(&target, source)?;
        let changed = commit(&target, &output, self.dry_run)?;
        log::info!("Converted: {} -> {}", source.display(), target.display());

        Ok(Processed {
            target,
            changed,
            warnings: report.warnings,
        })
    }
}
