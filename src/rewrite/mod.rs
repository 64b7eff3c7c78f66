//! Content rewriting for document bodies
//!
//! This module handles:
//! - Image relocation: copy local images into the asset directory and point
//!   references at their canonical URL
//! - Link retargeting: links to Jekyll pages become Docusaurus routes
//! - Code fences: Liquid `{% highlight %}` blocks become Markdown fences
//!
//! Rules are plain text substitutions over the body; text they do not match
//! is left byte-for-byte intact.

pub mod code_fence;
pub mod images;
pub mod links;

use std::path::{Path, PathBuf};

use crate::config::MigrationConfig;
use crate::error::MigrateError;

/// Inputs shared by the rewrite rules for one document.
#[derive(Debug, Clone, Copy)]
pub struct RewriteContext<'a> {
    pub config: &'a MigrationConfig,
    /// Directory of the document being rewritten, for relative image paths
    pub document_dir: &'a Path,
    /// Copy images into the asset directory (off for dry runs)
    pub copy_assets: bool,
}

/// What a rewrite pass did besides changing text.
#[derive(Debug, Default)]
pub struct RewriteReport {
    /// Images copied into the asset directory
    pub copied: Vec<PathBuf>,
    /// Non-fatal problems: missing images, failed copies
    pub warnings: Vec<MigrateError>,
}

/// URLs that point outside the site and are never rewritten.
pub(crate) fn is_external(url: &str) -> bool {
    ["http://", "https://", "//", "data:"]
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// Apply every body rule: images, then links, then code fences.
pub fn rewrite_body(body: &str, ctx: &RewriteContext<'_>) -> (String, RewriteReport) {
    let mut report = RewriteReport::default();
    let body = images::relocate(body, ctx, &mut report);
    let body = links::retarget(&body, ctx.config);
    let body = code_fence::translate(&body);
    (body, report)
}
