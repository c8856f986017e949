//! Resolved field model for the SDK

use serde::{Deserialize, Serialize};

/// Display type of a resolved field, as understood by the visualization tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VisualizationType {
    /// Numeric value, aggregable
    Number,
    /// True/false value
    Boolean,
    /// Web address
    Url,
    /// Calendar date or date-time
    Date,
    /// Anything else
    String,
}

impl std::fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisualizationType::Number => write!(f, "NUMBER"),
            VisualizationType::Boolean => write!(f, "BOOLEAN"),
            VisualizationType::Url => write!(f, "URL"),
            VisualizationType::Date => write!(f, "DATE"),
            VisualizationType::String => write!(f, "STRING"),
        }
    }
}

/// Whether a field groups rows or aggregates them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConceptRole {
    /// Categorical/grouping field
    Dimension,
    /// Aggregable numeric field
    Metric,
}

/// Semantic grouping hint for the visualization tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SemanticGroup {
    /// Date/time-valued field
    Datetime,
}

/// Semantics block attached to every resolved field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSemantics {
    /// Dimension or metric role
    pub concept_type: ConceptRole,
    /// Semantic group, only present for date-like fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_group: Option<SemanticGroup>,
}

/// A single resolved field in a schema descriptor
///
/// Fields are immutable once resolved. The serialized shape matches the
/// visualization tool's field-definition API:
/// `{ "name", "label", "dataType", "semantics": { "conceptType", "semanticGroup"? } }`.
///
/// # Example
///
/// ```rust
/// use document_schema_core::models::{ResolvedField, VisualizationType};
///
/// let field = ResolvedField::new("address.city", VisualizationType::String, false);
/// assert_eq!(field.label, "address.city");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    /// Dot-delimited field path, unique within a descriptor
    pub name: String,
    /// Display label, mirrors the name
    pub label: String,
    /// Resolved display type
    pub data_type: VisualizationType,
    /// Role and semantic-group metadata
    pub semantics: FieldSemantics,
}

impl ResolvedField {
    /// Create a resolved field from a path, a resolved type, and whether a
    /// numeric value was ever observed for the path
    pub fn new(name: impl Into<String>, data_type: VisualizationType, saw_numeric: bool) -> Self {
        let name = name.into();
        let concept_type = if saw_numeric {
            ConceptRole::Metric
        } else {
            ConceptRole::Dimension
        };
        let semantic_group = if data_type == VisualizationType::Date {
            Some(SemanticGroup::Datetime)
        } else {
            None
        };

        Self {
            label: name.clone(),
            name,
            data_type,
            semantics: FieldSemantics {
                concept_type,
                semantic_group,
            },
        }
    }

    /// Whether this field is a metric
    pub fn is_metric(&self) -> bool {
        self.semantics.concept_type == ConceptRole::Metric
    }
}
