//! Resolution of accumulated observations into a schema descriptor

use crate::models::{ResolvedField, SchemaDescriptor, VisualizationType};

use super::classify::TypeTag;
use super::error::InferenceError;
use super::observe::FieldObservations;

/// Resolve an observation set into an ordered schema descriptor
///
/// Fields are emitted in first-seen path order. Pure interior object nodes
/// are suppressed; their children carry the data. Fails with
/// [`InferenceError::EmptySchema`] when nothing resolvable was observed.
pub fn build_descriptor(
    observations: &FieldObservations,
) -> Result<SchemaDescriptor, InferenceError> {
    let mut fields = Vec::new();

    for (path, observation) in observations.iter() {
        if observation.is_interior() {
            continue;
        }

        let data_type = resolve_type(observation.tags());
        fields.push(ResolvedField::new(path, data_type, observation.saw_numeric()));
    }

    if fields.is_empty() {
        return Err(InferenceError::EmptySchema);
    }

    tracing::debug!(fields = fields.len(), "resolved schema descriptor");
    Ok(SchemaDescriptor::from_fields(fields))
}

/// Collapse an observed tag set into one display type
///
/// Fixed precedence, highest wins: number > boolean > url > date. Everything
/// else (plain strings, arrays, nulls, object-mixed sets) degrades to STRING.
fn resolve_type(tags: &[TypeTag]) -> VisualizationType {
    if tags.contains(&TypeTag::Number) {
        VisualizationType::Number
    } else if tags.contains(&TypeTag::Boolean) {
        VisualizationType::Boolean
    } else if tags.contains(&TypeTag::Url) {
        VisualizationType::Url
    } else if tags.contains(&TypeTag::StringDate) {
        VisualizationType::Date
    } else {
        VisualizationType::String
    }
}
