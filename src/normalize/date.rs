//! Date canonicalization: every recognized form becomes `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_yaml::Value;

/// Output format for canonical dates
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const ZONED_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M %z"];

/// Parse the date forms Jekyll frontmatter uses. The calendar date is taken
/// as written, without converting between time zones.
pub fn parse(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, CANONICAL_FORMAT) {
        return Some(date);
    }
    if let Some(date) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
    {
        return Some(date.date());
    }
    if let Some(date) = ZONED_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(input, fmt).ok())
    {
        return Some(date.date_naive());
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|date| date.date_naive())
}

/// Canonical form of a date string; unparseable input comes back unchanged.
pub fn canonicalize(input: &str) -> String {
    parse(input).map_or_else(
        || input.to_string(),
        |date| date.format(CANONICAL_FORMAT).to_string(),
    )
}

/// Field rule for `date`. Non-string values are left alone.
pub fn normalize(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) => Some(Value::String(canonicalize(s))),
        Value::Tagged(tagged) => tagged
            .value
            .as_str()
            .and_then(parse)
            .map(|date| Value::String(date.format(CANONICAL_FORMAT).to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::value::{Tag, TaggedValue};

    #[test]
    fn canonicalize_known_forms() {
        assert_eq!(canonicalize("2024-03-01"), "2024-03-01");
        assert_eq!(canonicalize("2024-03-01 10:00:00"), "2024-03-01");
        assert_eq!(canonicalize("2024-03-01T23:30:00"), "2024-03-01");
        assert_eq!(canonicalize("2024-03-01 10:00:00 +0200"), "2024-03-01");
        assert_eq!(canonicalize("2024-03-01T23:30:00-05:00"), "2024-03-01");
        assert_eq!(canonicalize("  2024-03-01 "), "2024-03-01");
    }

    #[test]
    fn canonicalize_unparseable_passes_through() {
        assert_eq!(canonicalize("not-a-date"), "not-a-date");
        assert_eq!(canonicalize("2024-13-45"), "2024-13-45");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn normalize_leaves_non_strings_alone() {
        assert_eq!(normalize(&Value::Number(20240301.into())), None);
        assert_eq!(normalize(&Value::Null), None);
    }

    #[test]
    fn normalize_tagged_timestamp() {
        let value = Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new("timestamp"),
            value: Value::String("2024-03-01 10:00:00".into()),
        }));
        assert_eq!(normalize(&value), Some(Value::String("2024-03-01".into())));
    }
}
