//! Image relocation: `![alt](path)` references to local files are copied
//! into the asset directory and rewritten to `<asset_url>/<file name>`.
//!
//! The reference is rewritten even when the image cannot be found or copied;
//! the problem is recorded as a warning instead.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{RewriteContext, RewriteReport, is_external};
use crate::common::fs::copy_file;
use crate::error::MigrateError;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\(([^)]+)\)").expect("valid image regex"));

/// Split `path "title"` into the path and the title suffix (with its
/// leading whitespace).
fn split_title(target: &str) -> (&str, &str) {
    let target = target.trim();
    match target.find(char::is_whitespace) {
        Some(idx) => (&target[..idx], &target[idx..]),
        None => (target, ""),
    }
}

/// Where the image referenced by `path` lives in the source tree, if it exists.
fn locate_source(path: &str, ctx: &RewriteContext<'_>) -> Result<PathBuf, PathBuf> {
    let stripped = path.trim_start_matches('/');
    let from_root = ctx.config.source_root.join(stripped);
    if path.starts_with('/') {
        return if from_root.is_file() { Ok(from_root) } else { Err(from_root) };
    }

    let from_document = ctx.document_dir.join(stripped);
    if from_document.is_file() {
        Ok(from_document)
    } else if from_root.is_file() {
        Ok(from_root)
    } else {
        Err(from_root)
    }
}

fn relocate_one(caps: &Captures<'_>, ctx: &RewriteContext<'_>, report: &mut RewriteReport) -> String {
    let alt = &caps[1];
    let (path, title) = split_title(&caps[2]);
    let canonical_prefix = format!("{}/", ctx.config.asset_url.trim_end_matches('/'));

    if is_external(path) || path.starts_with(&canonical_prefix) {
        return caps[0].to_string();
    }
    let Some(file_name) = Path::new(path.trim_start_matches('/'))
        .file_name()
        .and_then(|n| n.to_str())
    else {
        return caps[0].to_string();
    };

    match locate_source(path, ctx) {
        Ok(source) => {
            let target = ctx.config.asset_path().join(file_name);
            if !ctx.copy_assets {
                log::info!("Would copy image {} to {}", source.display(), target.display());
            } else if let Err(e) = copy_file(&source, &target) {
                log::warn!("{e}");
                report.warnings.push(e);
            } else {
                log::info!("Copied image: {file_name}");
                report.copied.push(target);
            }
        }
        Err(missing) => {
            log::warn!("Image not found: {}", missing.display());
            report.warnings.push(MigrateError::MissingAsset {
                path: missing.display().to_string(),
            });
        }
    }

    format!("![{alt}]({}{title})", ctx.config.asset_url_for(file_name))
}

/// Relocate every local image referenced in `body`.
pub fn relocate(body: &str, ctx: &RewriteContext<'_>, report: &mut RewriteReport) -> String {
    IMAGE_RE
        .replace_all(body, |caps: &Captures<'_>| relocate_one(caps, ctx, report))
        .into_owned()
}
