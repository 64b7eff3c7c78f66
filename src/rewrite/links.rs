//! Link retargeting: `[text](page.html)` becomes `[text](<link_route>/page)`.

#![allow(clippy::expect_used)]

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::is_external;
use crate::config::MigrationConfig;

// The optional leading `!` lets image markup match as a whole so it can be
// skipped.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));

fn is_page(url: &str, config: &MigrationConfig) -> bool {
    Path::new(url)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            config
                .page_extensions
                .iter()
                .any(|page| page.trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
}

/// Internal route for a page URL, built from its base file name.
pub fn route_for(url: &str, config: &MigrationConfig) -> Option<String> {
    if is_external(url) || url.starts_with("mailto:") || url.starts_with('#') {
        return None;
    }
    if !is_page(url, config) {
        return None;
    }
    let stem = Path::new(url).file_stem()?.to_str()?;
    Some(format!("{}/{stem}", config.link_route.trim_end_matches('/')))
}

/// Retarget every internal page link in `body`.
pub fn retarget(body: &str, config: &MigrationConfig) -> String {
    LINK_RE
        .replace_all(body, |caps: &Captures<'_>| {
            if &caps[1] == "!" {
                return caps[0].to_string();
            }
            match route_for(caps[3].trim(), config) {
                Some(route) => format!("[{}]({route})", &caps[2]),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
