//! Row projection onto a requested field list

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::unwrap::unwrap_document;

/// One projected result row
///
/// Values align positionally with the field list the caller requested, which
/// may differ from (and be a subset of) the schema descriptor order. Absent
/// fields hold `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedRow {
    /// One value per requested field, in request order
    pub values: Vec<Value>,
}

/// Project one document onto a requested field list
///
/// The document is unwrapped first, then every requested path is read by
/// splitting on `.` and walking nested objects. A missing segment, an array
/// or scalar in the middle of a path, or an absent leaf all resolve to
/// `null`, never to an error. Values are cloned verbatim; no coercion
/// happens at projection time.
pub fn project<S: AsRef<str>>(document: &Value, requested: &[S]) -> ProjectedRow {
    let effective = unwrap_document(document);

    ProjectedRow {
        values: requested
            .iter()
            .map(|field| read_path(effective, field.as_ref()))
            .collect(),
    }
}

/// Project a batch of documents, preserving document order
pub fn project_rows<S: AsRef<str>>(documents: &[Value], requested: &[S]) -> Vec<ProjectedRow> {
    documents
        .iter()
        .map(|document| project(document, requested))
        .collect()
}

fn read_path(document: &Value, path: &str) -> Value {
    let mut current = document;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(value) => current = value,
            None => return Value::Null,
        }
    }
    current.clone()
}
