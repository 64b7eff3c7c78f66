//! Migration configuration (`blogshift.yaml`)
//!
//! A single [`MigrationConfig`] carries every path and convention the
//! pipeline needs. It is loaded once, overridden from the command line, and
//! passed down explicitly; nothing in the pipeline reads process-wide state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config, fs};

/// Configuration file picked up from the current directory when `--config`
/// is not given
pub const CONFIG_FILE: &str = "blogshift.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationConfig {
    /// Root of the Jekyll site
    pub source_root: PathBuf,
    /// Root of the Docusaurus site
    pub target_root: PathBuf,
    /// Jekyll posts, relative to `source_root`
    pub posts_dir: PathBuf,
    /// Jekyll author listing, relative to `source_root`
    pub source_authors: PathBuf,
    /// Docusaurus blog directory, relative to `target_root`
    pub blog_dir: PathBuf,
    /// Per-author JSON records, relative to `target_root`
    pub authors_dir: PathBuf,
    /// Docusaurus `authors.yml`, relative to `target_root`
    pub authors_registry: PathBuf,
    /// Where relocated images are copied, relative to `target_root`
    pub asset_dir: PathBuf,
    /// URL prefix rewritten image references point at
    pub asset_url: String,
    /// Route prefix for retargeted internal links
    pub link_route: String,
    /// Post extensions picked up by `convert`
    pub source_extensions: Vec<String>,
    /// Post extensions picked up by `fix`
    pub target_extensions: Vec<String>,
    /// Link target extensions treated as internal pages
    pub page_extensions: Vec<String>,
    /// Extra frontmatter keys dropped by `convert`
    pub drop_fields: Vec<String>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("blog-jekyll"),
            target_root: PathBuf::from("aks-blog"),
            posts_dir: PathBuf::from("_posts"),
            source_authors: PathBuf::from("_data/authors.yml"),
            blog_dir: PathBuf::from("blog"),
            authors_dir: PathBuf::from("blog/authors"),
            authors_registry: PathBuf::from("blog/authors.yml"),
            asset_dir: PathBuf::from("static/img/blog"),
            asset_url: "/img/blog".to_string(),
            link_route: "/blog".to_string(),
            source_extensions: vec!["md".to_string(), "markdown".to_string()],
            target_extensions: vec!["md".to_string(), "mdx".to_string()],
            page_extensions: vec!["html".to_string(), "md".to_string()],
            drop_fields: Vec::new(),
        }
    }
}

impl MigrationConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Resolve the configuration to use.
    ///
    /// An explicit path must exist. Without one, [`CONFIG_FILE`] in `cwd` is
    /// used when present, otherwise the defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(config::not_found(path.display().to_string()));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = cwd.join(CONFIG_FILE);
                if !candidate.is_file() {
                    log::debug!("No {CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| fs::read_failed(&path, &e))?;
        let loaded = Self::from_yaml(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        log::debug!("Loaded configuration from {}", path.display());
        loaded.validate()?;
        Ok(loaded)
    }

    /// Apply command-line root overrides.
    #[must_use]
    pub fn with_roots(mut self, source: Option<PathBuf>, target: Option<PathBuf>) -> Self {
        if let Some(source) = source {
            self.source_root = source;
        }
        if let Some(target) = target {
            self.target_root = target;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("asset_url", &self.asset_url), ("link_route", &self.link_route)] {
            if !value.starts_with('/') {
                return Err(config::invalid(format!(
                    "{field} must start with '/', got '{value}'"
                )));
            }
        }
        for (field, list) in [
            ("source_extensions", &self.source_extensions),
            ("target_extensions", &self.target_extensions),
            ("page_extensions", &self.page_extensions),
        ] {
            if list.is_empty() {
                return Err(config::invalid(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn posts_path(&self) -> PathBuf {
        self.source_root.join(&self.posts_dir)
    }

    pub fn source_authors_path(&self) -> PathBuf {
        self.source_root.join(&self.source_authors)
    }

    pub fn blog_path(&self) -> PathBuf {
        self.target_root.join(&self.blog_dir)
    }

    pub fn authors_dir_path(&self) -> PathBuf {
        self.target_root.join(&self.authors_dir)
    }

    pub fn authors_registry_path(&self) -> PathBuf {
        self.target_root.join(&self.authors_registry)
    }

    pub fn asset_path(&self) -> PathBuf {
        self.target_root.join(&self.asset_dir)
    }

    /// Canonical URL for an asset file name.
    pub fn asset_url_for(&self, file_name: &str) -> String {
        format!("{}/{file_name}", self.asset_url.trim_end_matches('/'))
    }
}
