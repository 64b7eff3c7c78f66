//! Writing author registries in Docusaurus form.
//!
//! Two layouts are supported:
//! - per-author JSON records plus a generated `index.js` (`--format files`)
//! - a single `authors.yml` registry with `socials` (`--format registry`)

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use walkdir::WalkDir;

use super::{AuthorRecord, Registry};
use crate::common::fs::write_atomic;
use crate::error::{Result, fs};

/// Name of the generated JavaScript index in a records directory
pub const INDEX_JS: &str = "index.js";

/// Per-author record as written to `<id>.json`: no `socials`.
#[derive(Serialize)]
struct RecordFile<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
}

impl<'a> From<&'a AuthorRecord> for RecordFile<'a> {
    fn from(record: &'a AuthorRecord) -> Self {
        Self {
            name: &record.name,
            title: &record.title,
            url: record.url.as_deref(),
            image_url: record.image_url.as_deref(),
        }
    }
}

/// Render one author's JSON record.
pub fn record_json(record: &AuthorRecord) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(&RecordFile::from(record))?;
    json.push('\n');
    Ok(json)
}

/// Write `<id>.json` for every author into `dir`. Returns the written paths.
pub fn write_records(registry: &Registry, dir: &Path, dry_run: bool) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(registry.len());
    for record in registry.records() {
        let path = dir.join(format!("{}.json", record.id));
        let json = record_json(record).map_err(|e| fs::serialize_failed(&path, e))?;
        if dry_run {
            log::info!("Would write author record {}", path.display());
        } else {
            write_atomic(&path, &json)?;
            log::info!("Created author file: {}", path.display());
        }
        written.push(path);
    }
    Ok(written)
}

/// JavaScript binding name for an author identifier.
fn js_binding(id: &str) -> String {
    let mut binding: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    if binding.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        binding.insert(0, '_');
    }
    binding
}

/// One distinct binding per identifier; ids that sanitize alike (`a-b`,
/// `a_b`) get a numeric suffix in listing order.
fn js_bindings(ids: &[String]) -> Vec<String> {
    let mut taken = HashSet::new();
    ids.iter()
        .map(|id| {
            let base = js_binding(id);
            let mut binding = base.clone();
            let mut n = 2;
            while !taken.insert(binding.clone()) {
                binding = format!("{base}_{n}");
                n += 1;
            }
            binding
        })
        .collect()
}

/// Render `index.js` importing every listed author identifier.
pub fn render_index_js(ids: &[String]) -> String {
    let bindings = js_bindings(ids);
    let mut content = String::from("// Auto-generated index file for authors\n\n");
    for (id, binding) in ids.iter().zip(&bindings) {
        let _ = writeln!(content, "import {binding} from './{id}.json';");
    }
    content.push_str("\nexport default {\n");
    for (id, binding) in ids.iter().zip(&bindings) {
        let _ = writeln!(content, "  '{id}': {binding},");
    }
    content.push_str("};\n");
    content
}

/// Regenerate `index.js` from the JSON records currently in `dir`.
pub fn write_index_js(dir: &Path) -> Result<PathBuf> {
    let ids: Vec<String> = WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("json"))
        .filter_map(|e| e.path().file_stem().and_then(|s| s.to_str()).map(str::to_string))
        .collect();

    let path = dir.join(INDEX_JS);
    write_atomic(&path, &render_index_js(&ids))?;
    log::info!("Created authors index.js file: {}", path.display());
    Ok(path)
}

/// Render the `authors.yml` registry, identifiers in listing order.
pub fn render_registry(registry: &Registry) -> serde_yaml::Result<String> {
    let mut mapping = Mapping::new();
    for record in registry.records() {
        mapping.insert(
            Value::String(record.id.clone()),
            serde_yaml::to_value(record)?,
        );
    }
    serde_yaml::to_string(&mapping)
}

/// Write the `authors.yml` registry to `path`.
pub fn write_registry(registry: &Registry, path: &Path, dry_run: bool) -> Result<()> {
    let yaml = render_registry(registry).map_err(|e| fs::serialize_failed(path, e))?;
    if dry_run {
        log::info!("Would write author registry {}", path.display());
        return Ok(());
    }
    write_atomic(path, &yaml)?;
    log::info!("Docusaurus authors saved to: {}", path.display());
    Ok(())
}
