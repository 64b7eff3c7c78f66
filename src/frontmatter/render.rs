//! Per-field YAML rendering for the frontmatter block.

use serde_yaml::{Mapping, Value};

/// Fields rendered as single-line bracketed arrays (`authors: [a, b]`).
pub const FLOW_FIELDS: &[&str] = &["authors"];

/// Plain scalars YAML would read back as something other than a string.
const RESERVED_WORDS: &[&str] = &["true", "false", "null", "yes", "no", "on", "off", "y", "n", "~"];

pub(super) fn render_mapping(mapping: &Mapping) -> Result<String, serde_yaml::Error> {
    let mut out = String::new();
    for (key, value) in mapping {
        if let Some(line) = flow_line(key, value) {
            out.push_str(&line);
            out.push('\n');
            continue;
        }
        let mut single = Mapping::new();
        single.insert(key.clone(), value.clone());
        out.push_str(&serde_yaml::to_string(&single)?);
    }
    Ok(out)
}

/// `key: [a, b]` when `key` is a flow field holding only scalars.
fn flow_line(key: &Value, value: &Value) -> Option<String> {
    let name = key.as_str()?;
    if !FLOW_FIELDS.contains(&name) {
        return None;
    }
    let items = value.as_sequence()?;
    let rendered: Vec<String> = items.iter().map(flow_scalar).collect::<Option<_>>()?;
    Some(format!("{name}: [{}]", rendered.join(", ")))
}

fn flow_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(flow_string(s)),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        _ => None,
    }
}

fn flow_string(s: &str) -> String {
    if is_plain_safe(s) {
        s.to_string()
    } else {
        // A JSON string literal is a valid YAML double-quoted scalar.
        serde_json::Value::String(s.to_string()).to_string()
    }
}

fn is_plain_safe(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')) {
        return false;
    }
    let lower = s.to_ascii_lowercase();
    !RESERVED_WORDS.contains(&lower.as_str()) && s.parse::<f64>().is_err()
}
