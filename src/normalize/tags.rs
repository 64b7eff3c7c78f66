//! Tag coercion: a comma-separated string becomes a list.

use serde_yaml::Value;

/// Split a comma-separated tag string, trimming each tag. Empty segments are
/// dropped.
pub fn split(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Field rule for `tags`. Lists and other non-strings pass through.
pub fn normalize(value: &Value) -> Option<Value> {
    let input = value.as_str()?;
    Some(Value::Sequence(split(input).into_iter().map(Value::String).collect()))
}
