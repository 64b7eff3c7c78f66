//! Frontmatter field normalizers
//!
//! Each rule rewrites one field of a decoded frontmatter mapping and reports
//! whether it changed anything. Rules are independent of each other:
//! - [`date`]: canonical `YYYY-MM-DD` dates
//! - [`tags`]: comma-separated strings become lists
//! - [`authors`]: display names become author identifiers
//!
//! [`jekyll`] maps Jekyll field names onto Docusaurus ones and names the
//! converted file; it runs before the rules during `convert`.

pub mod authors;
pub mod date;
pub mod jekyll;
pub mod tags;

use serde_yaml::{Mapping, Value};

use crate::authors::AuthorIndex;

pub const TITLE: &str = "title";
pub const DATE: &str = "date";
pub const AUTHORS: &str = "authors";
pub const TAGS: &str = "tags";
pub const SLUG: &str = "slug";
pub const DESCRIPTION: &str = "description";

/// Replace `key` in place when `rule` produces a new value.
fn apply(frontmatter: &mut Mapping, key: &str, rule: impl Fn(&Value) -> Option<Value>) -> bool {
    let Some(current) = frontmatter.get_mut(key) else {
        return false;
    };
    match rule(current) {
        Some(updated) if updated != *current => {
            *current = updated;
            true
        }
        _ => false,
    }
}

/// Run every field rule over `frontmatter`. Returns the names of the fields
/// that changed.
pub fn normalize_frontmatter(frontmatter: &mut Mapping, index: &AuthorIndex) -> Vec<&'static str> {
    let mut changed = Vec::new();
    if apply(frontmatter, DATE, date::normalize) {
        changed.push(DATE);
    }
    if apply(frontmatter, TAGS, tags::normalize) {
        changed.push(TAGS);
    }
    if apply(frontmatter, AUTHORS, |v| authors::resolve(v, index)) {
        changed.push(AUTHORS);
    }
    changed
}
