//! Declarative inference strategy
//!
//! Translates a pre-computed structural "flavor" description into the same
//! observation stream the sampling strategy produces, so a schema can be
//! resolved without inspecting raw documents.

use serde_json::{Map, Value};

use crate::models::SchemaDescriptor;

use super::builder::build_descriptor;
use super::classify::{TypeTag, classify_declared};
use super::error::InferenceError;
use super::observe::FieldObservations;

/// Declarative schema inferrer
///
/// Walks one flavor description of the shape
/// `{ "properties": { field: { "type": string|[string], "samples"?: [..],
/// "properties"?: {..} } } }` and resolves it into a schema descriptor.
/// Nested property maps recurse with dotted path prefixes; the parent path
/// itself is not emitted. Every declared type name of a field widens that
/// field's observation set, so a `["number", "null"]` declaration resolves
/// exactly like a field sampled as both.
#[derive(Debug, Default)]
pub struct FlavorInferrer {
    observations: FieldObservations,
}

impl FlavorInferrer {
    /// Create a new flavor inferrer
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a schema descriptor from one flavor description
    pub fn infer(&mut self, flavor: &Value) -> Result<SchemaDescriptor, InferenceError> {
        self.observations = FieldObservations::new();

        if let Some(properties) = flavor.get("properties").and_then(Value::as_object) {
            self.walk_properties("", properties);
        }

        build_descriptor(&self.observations)
    }

    fn walk_properties(&mut self, prefix: &str, properties: &Map<String, Value>) {
        for (name, description) in properties {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };

            // Nested object descriptions carry the data in their children.
            if let Some(nested) = description.get("properties").and_then(Value::as_object) {
                self.walk_properties(&path, nested);
                continue;
            }

            let samples = description
                .get("samples")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            let declared = declared_types(description);
            if declared.is_empty() {
                // No usable declaration: degrade to a plain string field.
                self.observations.record(&path, TypeTag::String);
                continue;
            }

            for type_name in declared {
                self.observations
                    .record(&path, classify_declared(type_name, samples));
            }
        }
    }
}

/// Declared type names of one field description
///
/// The service reports either a single name or a list of names.
fn declared_types(description: &Value) -> Vec<&str> {
    match description.get("type") {
        Some(Value::String(name)) => vec![name.as_str()],
        Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConceptRole, VisualizationType};
    use serde_json::json;

    #[test]
    fn test_infer_simple_flavor() {
        let flavor = json!({
            "properties": {
                "id": {"type": "number", "samples": [1, 2]},
                "name": {"type": "string", "samples": ["A"]}
            }
        });

        let descriptor = FlavorInferrer::new().infer(&flavor).unwrap();
        assert_eq!(descriptor.names(), vec!["id", "name"]);
        assert_eq!(
            descriptor.get("id").unwrap().data_type,
            VisualizationType::Number
        );
        assert!(descriptor.get("id").unwrap().is_metric());
    }

    #[test]
    fn test_multi_type_declaration() {
        let flavor = json!({
            "properties": {
                "score": {"type": ["null", "number"]}
            }
        });

        let descriptor = FlavorInferrer::new().infer(&flavor).unwrap();
        let score = descriptor.get("score").unwrap();
        assert_eq!(score.data_type, VisualizationType::Number);
        assert_eq!(score.semantics.concept_type, ConceptRole::Metric);
    }

    #[test]
    fn test_url_from_sample() {
        let flavor = json!({
            "properties": {
                "site": {"type": "string", "samples": ["https://example.com"]},
                "motto": {"type": "string", "samples": ["fly safe"]}
            }
        });

        let descriptor = FlavorInferrer::new().infer(&flavor).unwrap();
        assert_eq!(
            descriptor.get("site").unwrap().data_type,
            VisualizationType::Url
        );
        assert_eq!(
            descriptor.get("motto").unwrap().data_type,
            VisualizationType::String
        );
    }

    #[test]
    fn test_nested_properties_recurse_and_suppress_parent() {
        let flavor = json!({
            "properties": {
                "name": {"type": "string"},
                "address": {
                    "type": "object",
                    "properties": {
                        "city": {"type": "string"},
                        "zip": {"type": "string"}
                    }
                }
            }
        });

        let descriptor = FlavorInferrer::new().infer(&flavor).unwrap();
        assert_eq!(descriptor.names(), vec!["name", "address.city", "address.zip"]);
        assert!(descriptor.get("address").is_none());
    }

    #[test]
    fn test_array_declaration_is_flat_string() {
        let flavor = json!({
            "properties": {
                "tags": {"type": "array"}
            }
        });

        let descriptor = FlavorInferrer::new().infer(&flavor).unwrap();
        assert_eq!(
            descriptor.get("tags").unwrap().data_type,
            VisualizationType::String
        );
    }

    #[test]
    fn test_missing_declaration_degrades_to_string() {
        let flavor = json!({
            "properties": {
                "mystery": {"samples": [1]}
            }
        });

        let descriptor = FlavorInferrer::new().infer(&flavor).unwrap();
        assert_eq!(
            descriptor.get("mystery").unwrap().data_type,
            VisualizationType::String
        );
    }

    #[test]
    fn test_empty_flavor_is_empty_schema() {
        let mut inferrer = FlavorInferrer::new();
        assert_eq!(
            inferrer.infer(&json!({"properties": {}})),
            Err(InferenceError::EmptySchema)
        );
        assert_eq!(inferrer.infer(&json!({})), Err(InferenceError::EmptySchema));
    }
}
