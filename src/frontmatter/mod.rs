//! Frontmatter codec: split a Markdown document into its YAML frontmatter
//! block and body, and put the two back together.
//!
//! The block is delimited by `---` marker lines. Keys keep their insertion
//! order in both directions ([`serde_yaml::Mapping`] is ordered), so fields the
//! pipeline does not understand survive a rewrite untouched.

mod render;

use serde_yaml::{Mapping, Value};

use crate::error::{MigrateError, frontmatter};

/// Marker line that opens and closes the frontmatter block
pub const MARKER: &str = "---";

/// A decoded document: frontmatter mapping plus opaque body text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub frontmatter: Mapping,
    pub body: String,
}

/// Why a document could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// No `---` block at the start of the document
    NoFrontmatter,
    /// The block exists but is not a YAML mapping
    Malformed(String),
}

impl DecodeError {
    /// Attach the document path, producing the crate-level error.
    pub fn at(self, path: &std::path::Path) -> MigrateError {
        let path = path.display().to_string();
        match self {
            DecodeError::NoFrontmatter => frontmatter::missing(path),
            DecodeError::Malformed(reason) => frontmatter::malformed(path, reason),
        }
    }
}

/// Parse `content` into frontmatter and body.
///
/// The first line must be the marker; the block ends at the next line that is
/// exactly the marker (trailing whitespace allowed). Blank lines between the
/// closing marker and the body, and trailing whitespace, are not part of the
/// body.
pub fn decode(content: &str) -> Result<Document, DecodeError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().ok_or(DecodeError::NoFrontmatter)?;
    if first.trim_end() != MARKER {
        return Err(DecodeError::NoFrontmatter);
    }

    let meta_start = first.len();
    let mut offset = meta_start;
    for line in lines {
        if line.trim_end() == MARKER {
            let frontmatter = parse_block(&content[meta_start..offset])?;
            let body = normalize_body(&content[offset + line.len()..]);
            return Ok(Document { frontmatter, body });
        }
        offset += line.len();
    }

    Err(DecodeError::NoFrontmatter)
}

fn parse_block(block: &str) -> Result<Mapping, DecodeError> {
    if block.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(mapping)) => Ok(mapping),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(other) => Err(DecodeError::Malformed(format!(
            "expected a mapping, found {}",
            value_kind(&other)
        ))),
        Err(e) => Err(DecodeError::Malformed(e.to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Body text as the codec stores it: leading blank lines and trailing
/// whitespace removed.
pub fn normalize_body(body: &str) -> String {
    body.trim_start_matches(['\r', '\n']).trim_end().to_string()
}

/// Serialize frontmatter and body back into a document.
///
/// Fields listed in [`render::FLOW_FIELDS`] are rendered as single-line bracketed
/// arrays when they hold a list of scalars; every other field uses
/// `serde_yaml`'s block style.
pub fn encode(frontmatter: &Mapping, body: &str) -> Result<String, serde_yaml::Error> {
    let yaml = render::render_mapping(frontmatter)?;
    let body = normalize_body(body);

    let mut out = String::with_capacity(yaml.len() + body.len() + 16);
    out.push_str(MARKER);
    out.push('\n');
    out.push_str(&yaml);
    out.push_str(MARKER);
    out.push('\n');
    if !body.is_empty() {
        out.push('\n');
        out.push_str(&body);
        out.push('\n');
    }
    Ok(out)
}

/// Get a string value from a frontmatter mapping by key.
pub fn get_str<'a>(frontmatter: &'a Mapping, key: &str) -> Option<&'a str> {
    frontmatter.get(key).and_then(Value::as_str)
}
