//! Single-wrapper-key document unwrapping

use serde_json::Value;

/// Discard a single synthetic wrapper key, if present
///
/// Result rows from a "select the whole record" style query commonly arrive
/// wrapped under an alias key, e.g. `{"airline": {...}}`. When a document has
/// exactly one key and that key's value is itself an object, the nested
/// object is the effective document. Anything else passes through unchanged.
///
/// The same check runs during schema inference and before every row
/// projection, so the two sides always read the same shape. A legitimate
/// one-field document whose only value is an object is indistinguishable from
/// a wrapped row; that ambiguity is inherent to the heuristic.
pub fn unwrap_document(document: &Value) -> &Value {
    if let Value::Object(map) = document
        && map.len() == 1
        && let Some((key, inner)) = map.iter().next()
        && inner.is_object()
    {
        tracing::debug!(key = %key, "unwrapped single-key document");
        return inner;
    }

    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwraps_single_object_key() {
        let wrapped = json!({"x": {"a": 1, "b": 2}});
        assert_eq!(unwrap_document(&wrapped), &json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_multiple_keys_unchanged() {
        let document = json!({"a": 1, "b": 2});
        assert_eq!(unwrap_document(&document), &document);
    }

    #[test]
    fn test_single_scalar_key_unchanged() {
        let document = json!({"count": 42});
        assert_eq!(unwrap_document(&document), &document);
    }

    #[test]
    fn test_single_array_key_unchanged() {
        let document = json!({"items": [1, 2, 3]});
        assert_eq!(unwrap_document(&document), &document);
    }

    #[test]
    fn test_single_null_key_unchanged() {
        let document = json!({"value": null});
        assert_eq!(unwrap_document(&document), &document);
    }

    #[test]
    fn test_non_object_document_unchanged() {
        let document = json!([{"a": 1}]);
        assert_eq!(unwrap_document(&document), &document);
    }
}
