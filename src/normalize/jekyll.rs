//! Jekyll → Docusaurus frontmatter mapping and output file naming.

use std::path::Path;

use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};

use super::{AUTHORS, DATE, DESCRIPTION, SLUG, TAGS, TITLE, date};
use crate::frontmatter::get_str;

/// Jekyll keys folded into Docusaurus ones and removed from the output
const SUPERSEDED: &[&str] = &["author", "categories", "permalink", "excerpt"];

/// Docusaurus keys placed at the front of the mapping
const MAPPED: &[&str] = &[TITLE, DATE, AUTHORS, TAGS, SLUG, DESCRIPTION];

/// `/2019/05/my-post/` → `my-post`
pub fn slug_from_permalink(permalink: &str) -> String {
    permalink
        .trim_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Map Jekyll frontmatter onto Docusaurus fields.
///
/// Mapped fields come first in a fixed order (title, date, authors, tags,
/// slug, description); every other key follows in its original order, except
/// superseded Jekyll keys and `drop_fields`.
pub fn map_fields(frontmatter: &Mapping, drop_fields: &[String]) -> Mapping {
    let field = |key: &str| frontmatter.get(key).cloned();
    let mut out = Mapping::new();

    if let Some(title) = field(TITLE) {
        out.insert(TITLE.into(), title);
    }
    if let Some(value) = field(DATE) {
        out.insert(DATE.into(), date::normalize(&value).unwrap_or(value));
    }

    let authors = field(AUTHORS).or_else(|| {
        field("author").map(|author| match author {
            Value::Sequence(_) => author,
            scalar => Value::Sequence(vec![scalar]),
        })
    });
    if let Some(authors) = authors {
        out.insert(AUTHORS.into(), authors);
    }

    if let Some(tags) = field(TAGS).or_else(|| field("categories")) {
        out.insert(TAGS.into(), tags);
    }

    let permalink_slug = match frontmatter.get("permalink") {
        Some(Value::String(permalink)) => Some(Value::String(slug_from_permalink(permalink))),
        _ => None,
    };
    if let Some(slug) = permalink_slug.or_else(|| field(SLUG)) {
        out.insert(SLUG.into(), slug);
    }

    if let Some(description) = field(DESCRIPTION).or_else(|| field("excerpt")) {
        out.insert(DESCRIPTION.into(), description);
    }

    for (key, value) in frontmatter {
        let skipped = key.as_str().is_some_and(|k| {
            MAPPED.contains(&k) || SUPERSEDED.contains(&k) || drop_fields.iter().any(|d| d == k)
        });
        if !skipped {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}

/// Output file name for a converted post: `<date>-<name>.md`, lower-cased,
/// with characters outside `[A-Za-z0-9_.-]` replaced by `-`.
pub fn output_file_name(frontmatter: &Mapping, source: &Path, today: NaiveDate) -> String {
    let date_prefix = match frontmatter.get(DATE) {
        Some(Value::String(d)) => d.clone(),
        _ => today.format(date::CANONICAL_FORMAT).to_string(),
    };

    let name = match get_str(frontmatter, SLUG) {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => source_stem_name(source),
    };

    sanitize_file_name(&format!("{date_prefix}-{name}.md"))
}

/// Source file stem without a Jekyll `YYYY-MM-DD-` prefix.
fn source_stem_name(source: &Path) -> String {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();

    if stem.starts_with(|c: char| c.is_ascii_digit()) {
        let parts: Vec<&str> = stem.splitn(4, '-').collect();
        if let [_, _, _, rest] = parts.as_slice() {
            return (*rest).to_string();
        }
    }
    stem.to_string()
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') { c } else { '-' })
        .collect::<String>()
        .to_lowercase()
}
