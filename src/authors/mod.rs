//! Author registry mapping
//!
//! This module handles:
//! - Parsing the Jekyll author listing (`_data/authors.yml`)
//! - Deriving stable identifiers from display names
//! - Ranking links to pick an author's primary URL
//! - Classifying links into the Docusaurus `socials` map
//!
//! Writing the registry to disk lives in [`output`]; loading a name → identifier
//! index back for frontmatter resolution lives in [`index`].

pub mod index;
pub mod output;

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Result, authors, fs};

pub use index::AuthorIndex;

/// Link labels ranked for primary URL selection, lowest rank wins.
///
/// Labels are matched case-sensitively, as they appear in the listing.
pub const LINK_PRIORITY: &[(&str, u32)] = &[
    ("GitHub", 1),
    ("LinkedIn", 2),
    ("Blog", 3),
    ("X", 4),
    ("Email", 5),
];

/// Rank given to labels missing from [`LINK_PRIORITY`].
pub const UNRANKED: u32 = 999;

/// One entry of an author's `links` list in the Jekyll listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
}

impl LinkEntry {
    #[cfg(test)]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn rank(&self) -> u32 {
        LINK_PRIORITY
            .iter()
            .find(|(label, _)| *label == self.label)
            .map_or(UNRANKED, |(_, rank)| *rank)
    }
}

/// An author as the Jekyll listing describes them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct RawAuthor {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub links: Vec<LinkEntry>,
}

/// Social handles keyed by platform, as the Docusaurus registry expects them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Socials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Socials {
    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.github.is_none()
            && self.linkedin.is_none()
            && self.website.is_none()
            && self.email.is_none()
    }
}

/// A normalized author record. Empty fields are left out when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorRecord {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Socials::is_empty")]
    pub socials: Socials,
}

/// Identifier → record, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    records: Vec<AuthorRecord>,
}

impl Registry {
    /// Insert a record; a record with the same identifier is replaced in place.
    pub fn insert(&mut self, record: AuthorRecord) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) {
            log::warn!(
                "Author '{}' and '{}' share identifier '{}'; keeping the latter",
                existing.name,
                record.name,
                record.id
            );
            *existing = record;
        } else {
            self.records.push(record);
        }
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&AuthorRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[AuthorRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derive an author identifier from a display name: lowercase, spaces become
/// hyphens, everything outside `[a-z0-9-]` is dropped.
pub fn derive_id(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Pick the highest-priority link with a non-empty URL. Ties keep listing
/// order.
pub fn primary_url(links: &[LinkEntry]) -> Option<String> {
    links
        .iter()
        .enumerate()
        .filter(|(_, link)| !link.url.is_empty())
        .min_by_key(|(position, link)| (link.rank(), *position))
        .map(|(_, link)| link.url.clone())
}

/// Classify links into social handles. Unrecognized labels are ignored.
pub fn socials(links: &[LinkEntry]) -> Socials {
    let mut socials = Socials::default();
    for link in links.iter().filter(|l| !l.url.is_empty()) {
        match link.label.to_lowercase().as_str() {
            "x" | "twitter" => socials.x = Some(trailing_segment(&link.url)),
            "github" => socials.github = Some(trailing_segment(&link.url)),
            "linkedin" => socials.linkedin = Some(trailing_segment(&link.url)),
            "blog" | "website" => socials.website = Some(link.url.clone()),
            "email" => {
                if let Some(address) = link.url.strip_prefix("mailto:") {
                    socials.email = Some(address.to_string());
                }
            }
            _ => {}
        }
    }
    socials
}

fn trailing_segment(url: &str) -> String {
    let url = url.trim_end_matches('/');
    url.rsplit('/').next().unwrap_or(url).to_string()
}

/// Build a normalized record for one listing entry keyed by `display_name`.
pub fn build_record(display_name: &str, raw: &RawAuthor) -> AuthorRecord {
    let image_url = raw
        .avatar
        .as_deref()
        .filter(|a| !a.trim().is_empty())
        .map(str::to_string);

    AuthorRecord {
        id: derive_id(display_name),
        name: raw
            .name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| display_name.to_string()),
        title: raw.bio.clone().unwrap_or_default(),
        url: primary_url(&raw.links),
        image_url,
        socials: socials(&raw.links),
    }
}

/// Build the registry for a whole listing.
pub fn build_registry(listing: &[(String, RawAuthor)]) -> Registry {
    let mut registry = Registry::default();
    for (display_name, raw) in listing {
        registry.insert(build_record(display_name, raw));
    }
    registry
}

/// Parse a Jekyll author listing, keeping source order.
pub fn parse_listing(yaml: &str) -> std::result::Result<Vec<(String, RawAuthor)>, String> {
    let value: Value = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
    let mapping = match value {
        Value::Mapping(m) => m,
        Value::Null => Mapping::new(),
        _ => return Err("expected a mapping of author names".to_string()),
    };

    mapping
        .into_iter()
        .map(|(key, data)| {
            let name = match key {
                Value::String(s) => s,
                other => serde_yaml::to_string(&other)
                    .map_err(|e| e.to_string())?
                    .trim()
                    .to_string(),
            };
            let raw = if data.is_null() {
                RawAuthor::default()
            } else {
                serde_yaml::from_value(data).map_err(|e| format!("author '{name}': {e}"))?
            };
            Ok((name, raw))
        })
        .collect()
}

/// Read and parse the Jekyll author listing at `path`.
pub fn load_listing(path: &Path) -> Result<Vec<(String, RawAuthor)>> {
    let content = std::fs::read_to_string(path).map_err(|e| fs::read_failed(path, &e))?;
    parse_listing(&content).map_err(|reason| authors::parse_failed(path.display().to_string(), reason))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn links(pairs: &[(&str, &str)]) -> Vec<LinkEntry> {
        pairs.iter().map(|(l, u)| LinkEntry::new(*l, *u)).collect()
    }

    #[test]
    fn derive_id_strips_punctuation() {
        assert_eq!(derive_id("Jane Q. Public"), "jane-q-public");
        assert_eq!(derive_id("Kenneth Kilty"), "kenneth-kilty");
        assert_eq!(derive_id("José  Núñez"), "jos--nez");
    }

    #[test]
    fn derive_id_is_idempotent() {
        for name in ["Jane Q. Public", "ALL CAPS", "x_y z", "already-an-id"] {
            let once = derive_id(name);
            assert_eq!(derive_id(&once), once);
        }
    }

    #[test]
    fn primary_url_prefers_github_over_x() {
        let l = links(&[("X", "u1"), ("GitHub", "u2")]);
        assert_eq!(primary_url(&l), Some("u2".to_string()));
        let l = links(&[("GitHub", "u2"), ("X", "u1")]);
        assert_eq!(primary_url(&l), Some("u2".to_string()));
    }

    #[test]
    fn primary_url_ties_keep_listing_order() {
        let l = links(&[("Mastodon", "first"), ("Speakerdeck", "second")]);
        assert_eq!(primary_url(&l), Some("first".to_string()));
    }

    #[test]
    fn primary_url_labels_are_case_sensitive() {
        let l = links(&[("github", "lower"), ("Email", "mailto:a@b.c")]);
        assert_eq!(primary_url(&l), Some("mailto:a@b.c".to_string()));
    }

    #[test]
    fn primary_url_empty_links() {
        assert_eq!(primary_url(&[]), None);
        assert_eq!(primary_url(&links(&[("GitHub", "")])), None);
    }

    #[test]
    fn primary_url_skips_blank_top_link() {
        let l = links(&[("GitHub", ""), ("X", "https://x.com/kkilty")]);
        assert_eq!(primary_url(&l), Some("https://x.com/kkilty".to_string()));
    }

    #[test]
    fn socials_classify_links() {
        let l = links(&[
            ("X", "https://x.com/kkilty"),
            ("GitHub", "https://github.com/kkilty"),
            ("LinkedIn", "https://www.linkedin.com/in/kenneth-kilty"),
            ("Blog", "https://kilty.dev"),
            ("Email", "mailto:ken@example.com"),
            ("Mastodon", "https://hachyderm.io/@ken"),
        ]);
        let s = socials(&l);
        assert_eq!(s.x.as_deref(), Some("kkilty"));
        assert_eq!(s.github.as_deref(), Some("kkilty"));
        assert_eq!(s.linkedin.as_deref(), Some("kenneth-kilty"));
        assert_eq!(s.website.as_deref(), Some("https://kilty.dev"));
        assert_eq!(s.email.as_deref(), Some("ken@example.com"));
    }

    #[test]
    fn socials_skip_email_without_scheme_and_empty_urls() {
        let l = links(&[("Email", "ken@example.com"), ("GitHub", "")]);
        assert!(socials(&l).is_empty());
    }

    #[test]
    fn build_record_omits_blank_fields() {
        let raw = RawAuthor {
            avatar: Some("   ".to_string()),
            ..RawAuthor::default()
        };
        let record = build_record("Jane Doe", &raw);
        assert_eq!(record.id, "jane-doe");
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.image_url, None);
        assert_eq!(record.url, None);

        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json, serde_json::json!({"name": "Jane Doe"}));
    }

    #[test]
    fn parse_listing_keeps_source_order() {
        let yaml = r#"
Zed Last:
  bio: Engineer
  avatar: /img/zed.png
  links:
    - label: GitHub
      url: https://github.com/zed
Amy First:
  name: Amy F.
"#;
        let listing = parse_listing(yaml).expect("parse");
        let names: Vec<&str> = listing.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Zed Last", "Amy First"]);

        let registry = build_registry(&listing);
        let ids: Vec<&str> = registry.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["zed-last", "amy-first"]);
        let zed = registry.get("zed-last").expect("zed");
        assert_eq!(zed.title, "Engineer");
        assert_eq!(zed.url.as_deref(), Some("https://github.com/zed"));
        assert_eq!(registry.get("amy-first").map(|r| r.name.as_str()), Some("Amy F."));
    }

    #[test]
    fn parse_listing_rejects_non_mapping() {
        assert!(parse_listing("- a\n- b\n").is_err());
        assert!(parse_listing("").expect("empty listing").is_empty());
    }

    #[test]
    fn duplicate_identifiers_last_writer_wins() {
        let listing = vec![
            ("Jane Doe".to_string(), RawAuthor::default()),
            (
                "jane doe".to_string(),
                RawAuthor {
                    bio: Some("second".to_string()),
                    ..RawAuthor::default()
                },
            ),
        ];
        let registry = build_registry(&listing);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("jane-doe").map(|r| r.title.as_str()), Some("second"));
    }
}
