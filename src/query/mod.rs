//! Boundary types for the document query service
//!
//! The query service hands this crate fully materialized JSON: a result
//! envelope for read queries, and a structural-inference result for the
//! declarative strategy. Parsing and envelope validation live here; the
//! engine itself only ever sees plain documents.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope status reported for a successful query
pub const STATUS_SUCCESS: &str = "success";

/// Raw result envelope returned by the query service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    /// Service-reported status, `"success"` or an error marker
    #[serde(default)]
    pub status: String,
    /// Result documents, one per row
    #[serde(default)]
    pub results: Vec<Value>,
    /// Service-reported errors, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Value>,
}

impl QueryResult {
    /// Parse an envelope from its JSON encoding
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse query result envelope")
    }

    /// Whether the service reported success
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Result documents of a successful query
    ///
    /// A non-success status is a boundary failure and is never silently
    /// treated as an empty result set. An empty `results` array on a
    /// successful envelope passes through; schema building will reject it
    /// with its own empty-schema error.
    pub fn documents(&self) -> Result<&[Value]> {
        if !self.is_success() {
            bail!(
                "query returned status '{}' with {} error(s)",
                self.status,
                self.errors.len()
            );
        }
        Ok(&self.results)
    }
}

/// Pick the first flavor out of a structural-inference result
///
/// The structural-inference facility returns one entry per flavor when
/// documents in a collection diverge in shape, either as a flat list or as a
/// single nested list. Only the first flavor is used; discarded flavors are
/// logged. A collection with divergent shapes therefore loses schema
/// information for all but one flavor.
pub fn first_flavor(results: &[Value]) -> Option<&Value> {
    let first = results.first()?;

    match first {
        Value::Array(flavors) => {
            if flavors.len() > 1 {
                tracing::warn!(
                    discarded = flavors.len() - 1,
                    "multiple schema flavors returned; using the first"
                );
            }
            flavors.first()
        }
        _ => {
            if results.len() > 1 {
                tracing::warn!(
                    discarded = results.len() - 1,
                    "multiple schema flavors returned; using the first"
                );
            }
            Some(first)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success_envelope() {
        let envelope = r#"{"status": "success", "results": [{"id": 1}]}"#;
        let result = QueryResult::from_json(envelope).unwrap();

        assert!(result.is_success());
        assert_eq!(result.documents().unwrap(), &[json!({"id": 1})]);
    }

    #[test]
    fn test_error_status_is_boundary_failure() {
        let envelope = r#"{"status": "fatal", "results": [], "errors": [{"code": 4010}]}"#;
        let result = QueryResult::from_json(envelope).unwrap();

        let err = result.documents().unwrap_err();
        assert!(err.to_string().contains("fatal"));
    }

    #[test]
    fn test_empty_results_pass_through() {
        let envelope = r#"{"status": "success", "results": []}"#;
        let result = QueryResult::from_json(envelope).unwrap();

        assert!(result.documents().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_envelope() {
        assert!(QueryResult::from_json("{not json").is_err());
    }

    #[test]
    fn test_first_flavor_nested_list() {
        let results = vec![json!([
            {"properties": {"a": {"type": "number"}}},
            {"properties": {"b": {"type": "string"}}}
        ])];

        let flavor = first_flavor(&results).unwrap();
        assert!(flavor["properties"].get("a").is_some());
    }

    #[test]
    fn test_first_flavor_flat_list() {
        let results = vec![
            json!({"properties": {"a": {"type": "number"}}}),
            json!({"properties": {"b": {"type": "string"}}}),
        ];

        let flavor = first_flavor(&results).unwrap();
        assert!(flavor["properties"].get("a").is_some());
    }

    #[test]
    fn test_first_flavor_empty() {
        assert!(first_flavor(&[]).is_none());
        assert!(first_flavor(&[json!([])]).is_none());
    }
}
