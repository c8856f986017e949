//! Type classification for raw JSON values

use chrono::{DateTime, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw classification vocabulary
///
/// A superset of the final visualization types: `Array` and `Object` never
/// surface directly in a descriptor (arrays display flat, objects are walked
/// into their children), and `Null` only widens an observation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeTag {
    /// Explicit null or absent value
    Null,
    /// Any JSON number
    Number,
    /// True/false
    Boolean,
    /// String starting with an http(s) scheme
    Url,
    /// String that parses as a calendar date/time
    StringDate,
    /// Any other string
    String,
    /// Array value, elements are not classified
    Array,
    /// Nested object, walked by the aggregator
    Object,
}

impl TypeTag {
    /// Collapse the string-heuristic refinements back to plain strings
    pub fn without_string_heuristics(self) -> Self {
        match self {
            TypeTag::Url | TypeTag::StringDate => TypeTag::String,
            other => other,
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeTag::Null => write!(f, "null"),
            TypeTag::Number => write!(f, "number"),
            TypeTag::Boolean => write!(f, "boolean"),
            TypeTag::Url => write!(f, "url"),
            TypeTag::StringDate => write!(f, "string-date"),
            TypeTag::String => write!(f, "string"),
            TypeTag::Array => write!(f, "array"),
            TypeTag::Object => write!(f, "object"),
        }
    }
}

// Candidate pattern for ISO-style date-times; chrono confirms actual
// calendar validity afterwards
static ISO_DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2}(\.\d+)?)?(Z|[+-]\d{2}:?\d{2})?$")
        .unwrap()
});

/// Classify a raw JSON value
///
/// Checks run in a fixed order, first match wins:
/// null, number, boolean, url string, date-like string, plain string,
/// array, object. Total over any JSON value; never fails.
pub fn classify(value: &Value) -> TypeTag {
    match value {
        Value::Null => TypeTag::Null,
        Value::Number(_) => TypeTag::Number,
        Value::Bool(_) => TypeTag::Boolean,
        Value::String(s) => {
            if is_url_like(s) {
                TypeTag::Url
            } else if is_date_like(s) {
                TypeTag::StringDate
            } else {
                TypeTag::String
            }
        }
        Value::Array(_) => TypeTag::Array,
        Value::Object(_) => TypeTag::Object,
    }
}

/// Classify a declared type name from a structural description
///
/// Used by the declarative strategy: the service reports type names instead
/// of raw values, optionally with sample values. Sample strings are only
/// consulted for the URL refinement. Unknown names degrade to `String`.
pub fn classify_declared(type_name: &str, samples: &[Value]) -> TypeTag {
    match type_name.to_ascii_lowercase().as_str() {
        "number" | "integer" => TypeTag::Number,
        "boolean" => TypeTag::Boolean,
        "string" => {
            if samples.iter().filter_map(Value::as_str).any(is_url_like) {
                TypeTag::Url
            } else {
                TypeTag::String
            }
        }
        "array" => TypeTag::Array,
        "object" => TypeTag::Object,
        "null" => TypeTag::Null,
        _ => TypeTag::String,
    }
}

/// True when the string starts with an absolute http(s) scheme
pub fn is_url_like(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// True when the string is long enough and parses as a calendar date/time
///
/// Plain dates (`2024-01-15`, exactly ten characters) deliberately fail the
/// length gate; only timestamp-shaped strings qualify.
pub fn is_date_like(value: &str) -> bool {
    if value.len() <= 10 {
        return false;
    }

    if ISO_DATETIME_REGEX.is_match(value) {
        return parses_as_datetime(value);
    }

    DateTime::parse_from_rfc2822(value).is_ok()
}

fn parses_as_datetime(value: &str) -> bool {
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return true;
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_primitives() {
        assert_eq!(classify(&Value::Null), TypeTag::Null);
        assert_eq!(classify(&json!(42)), TypeTag::Number);
        assert_eq!(classify(&json!(3.25)), TypeTag::Number);
        assert_eq!(classify(&json!(true)), TypeTag::Boolean);
        assert_eq!(classify(&json!("plain text")), TypeTag::String);
    }

    #[test]
    fn test_classify_containers() {
        assert_eq!(classify(&json!([1, 2, 3])), TypeTag::Array);
        assert_eq!(classify(&json!([])), TypeTag::Array);
        assert_eq!(classify(&json!({"a": 1})), TypeTag::Object);
    }

    #[test]
    fn test_classify_url() {
        assert_eq!(classify(&json!("https://example.com")), TypeTag::Url);
        assert_eq!(classify(&json!("http://localhost:8080/path")), TypeTag::Url);
        // other schemes stay plain strings
        assert_eq!(classify(&json!("ftp://example.com")), TypeTag::String);
    }

    #[test]
    fn test_classify_date_like() {
        assert_eq!(
            classify(&json!("2024-01-15T10:30:00Z")),
            TypeTag::StringDate
        );
        assert_eq!(
            classify(&json!("2024-01-15 10:30:00")),
            TypeTag::StringDate
        );
        assert_eq!(
            classify(&json!("2024-01-15T10:30:00+05:00")),
            TypeTag::StringDate
        );
    }

    #[test]
    fn test_plain_date_is_too_short() {
        // exactly ten characters, fails the length gate
        assert_eq!(classify(&json!("2024-01-15")), TypeTag::String);
    }

    #[test]
    fn test_invalid_calendar_date_rejected() {
        assert_eq!(classify(&json!("2024-13-45T99:99:99")), TypeTag::String);
        assert_eq!(classify(&json!("a string longer than ten")), TypeTag::String);
    }

    #[test]
    fn test_url_wins_over_date() {
        // rule order: url check runs before the date heuristic
        assert_eq!(classify(&json!("https://2024-01-15T10:30:00")), TypeTag::Url);
    }

    #[test]
    fn test_classify_declared_names() {
        assert_eq!(classify_declared("number", &[]), TypeTag::Number);
        assert_eq!(classify_declared("integer", &[]), TypeTag::Number);
        assert_eq!(classify_declared("boolean", &[]), TypeTag::Boolean);
        assert_eq!(classify_declared("string", &[]), TypeTag::String);
        assert_eq!(classify_declared("array", &[]), TypeTag::Array);
        assert_eq!(classify_declared("null", &[]), TypeTag::Null);
        assert_eq!(classify_declared("binary", &[]), TypeTag::String);
    }

    #[test]
    fn test_classify_declared_url_sample() {
        let samples = vec![json!("https://example.com/logo.png")];
        assert_eq!(classify_declared("string", &samples), TypeTag::Url);

        let plain = vec![json!("not a url")];
        assert_eq!(classify_declared("string", &plain), TypeTag::String);
    }

    #[test]
    fn test_without_string_heuristics() {
        assert_eq!(
            TypeTag::Url.without_string_heuristics(),
            TypeTag::String
        );
        assert_eq!(
            TypeTag::StringDate.without_string_heuristics(),
            TypeTag::String
        );
        assert_eq!(
            TypeTag::Number.without_string_heuristics(),
            TypeTag::Number
        );
    }
}
