//! Display name → author identifier index used to resolve frontmatter `authors`.
//!
//! The index can come from any of the three author forms this tool knows: the
//! Jekyll listing, a directory of per-author JSON records, or a Docusaurus
//! `authors.yml` registry.

use std::collections::HashMap;
use std::path::Path;

use serde_yaml::Value;
use walkdir::WalkDir;

use super::{AuthorRecord, RawAuthor, derive_id};
use crate::error::{Result, authors, fs};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorIndex {
    by_name: HashMap<String, String>,
}

impl AuthorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: impl Into<String>) {
        self.by_name.insert(name.into(), id.into());
    }

    /// Identifier registered for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Identifier for `name`: the registered one, or one derived from the name.
    pub fn resolve(&self, name: &str) -> String {
        self.lookup(name)
            .map_or_else(|| derive_id(name), str::to_string)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Index a Jekyll listing by both its keys and any explicit `name` fields.
    pub fn from_listing(listing: &[(String, RawAuthor)]) -> Self {
        let mut index = Self::new();
        for (display_name, raw) in listing {
            let id = derive_id(display_name);
            if let Some(name) = raw.name.as_deref().filter(|n| !n.is_empty()) {
                index.insert(name, id.clone());
            }
            index.insert(display_name.clone(), id);
        }
        index
    }

    /// Load a Docusaurus `authors.yml` registry (identifier → `{name, ...}`).
    pub fn load_registry_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| fs::read_failed(path, &e))?;
        let value: Value = serde_yaml::from_str(&content)
            .map_err(|e| authors::parse_failed(path.display().to_string(), e.to_string()))?;

        let mut index = Self::new();
        let Some(mapping) = value.as_mapping() else {
            return Ok(index);
        };
        for (id, entry) in mapping {
            let (Some(id), Some(name)) = (id.as_str(), entry.get("name").and_then(Value::as_str))
            else {
                continue;
            };
            index.insert(name, id);
        }
        Ok(index)
    }

    /// Load a directory of `<identifier>.json` author records. Unreadable
    /// records are logged and left out.
    pub fn load_records_dir(dir: &Path) -> Result<Self> {
        let mut index = Self::new();
        let entries = WalkDir::new(dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("json"));

        for entry in entries {
            let path = entry.path();
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match read_record(path) {
                Ok(record) => index.insert(record.name, id),
                Err(e) => log::warn!("Skipping author record: {e}"),
            }
        }
        Ok(index)
    }

    /// Load whichever author form `path` holds: a directory of JSON records or
    /// a registry file. A missing path yields an empty index.
    pub fn load(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::load_records_dir(path)
        } else if path.is_file() {
            Self::load_registry_file(path)
        } else {
            Ok(Self::new())
        }
    }
}

fn read_record(path: &Path) -> Result<AuthorRecord> {
    let content = std::fs::read_to_string(path).map_err(|e| fs::read_failed(path, &e))?;
    serde_json::from_str(&content)
        .map_err(|e| authors::parse_failed(path.display().to_string(), e.to_string()))
}
