//! Per-document operations run by the batch driver
//!
//! - [`ConvertOperation`]: Jekyll post → Docusaurus post in the target tree
//! - [`FixOperation`]: in-place normalization of a Docusaurus post
//!
//! Both run the same stages: decode → frontmatter rules → body rewrite →
//! encode → atomic write. They differ in where the output goes and in the
//! Jekyll field mapping that only `convert` applies.

pub mod convert;
pub mod fix;

pub use convert::ConvertOperation;
pub use fix::FixOperation;

use std::path::{Path, PathBuf};

use serde_yaml::Mapping;

use crate::error::{MigrateError, Result, frontmatter};
use crate::rewrite::{RewriteContext, RewriteReport, rewrite_body};

/// Result of processing one document successfully.
#[derive(Debug)]
pub struct Processed {
    /// Where the document was (or would be) written
    pub target: PathBuf,
    /// Whether the written content differs from what was there before
    pub changed: bool,
    /// Non-fatal problems met along the way
    pub warnings: Vec<MigrateError>,
}

/// A per-file step the batch driver can run.
pub trait DocumentOperation {
    /// Short verb for logs and progress ("convert", "fix")
    fn name(&self) -> &'static str;

    fn process(&self, path: &Path) -> Result<Processed>;
}

/// Rewrite the body and re-encode the document.
fn render(
    path: &Path,
    frontmatter: &Mapping,
    body: &str,
    ctx: &RewriteContext<'_>,
) -> Result<(String, RewriteReport)> {
    let (body, report) = rewrite_body(body, ctx);
    if !report.copied.is_empty() {
        log::debug!("{}: copied {} images", path.display(), report.copied.len());
    }
    let content = crate::frontmatter::encode(frontmatter, &body)
        .map_err(|e| frontmatter::malformed(path.display().to_string(), e.to_string()))?;
    Ok((content, report))
}

/// Replace `target` with `content` unless this is a dry run. Returns whether
/// the content differs from what is on disk.
fn commit(target: &Path, content: &str, dry_run: bool) -> Result<bool> {
    let changed = std::fs::read_to_string(target).map_or(true, |existing| existing != content);
    if dry_run {
        log::info!("Would write {}", target.display());
    } else {
        crate::common::fs::write_atomic(target, content)?;
    }
    Ok(changed)
}
