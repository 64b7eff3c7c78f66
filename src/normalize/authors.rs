//! Author reference resolution: display names become author identifiers.

use serde_yaml::Value;

use crate::authors::AuthorIndex;

/// Whether every entry already looks like an identifier (no whitespace).
fn is_resolved(names: &[&str]) -> bool {
    names.iter().all(|name| !name.chars().any(char::is_whitespace))
}

/// Field rule for `authors`.
///
/// - a single name becomes a one-element list of its identifier
/// - a list of names is resolved entry by entry, unless every entry is
///   already identifier-shaped
/// - anything else (nested mappings, mixed lists) is left alone
pub fn resolve(value: &Value, index: &AuthorIndex) -> Option<Value> {
    match value {
        Value::String(name) => Some(Value::Sequence(vec![Value::String(index.resolve(name))])),
        Value::Sequence(items) => {
            let names: Vec<&str> = items.iter().map(Value::as_str).collect::<Option<_>>()?;
            if is_resolved(&names) {
                return None;
            }
            Some(Value::Sequence(
                names
                    .into_iter()
                    .map(|name| Value::String(index.resolve(name)))
                    .collect(),
            ))
        }
        _ => None,
    }
}
