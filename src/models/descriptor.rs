//! Schema descriptor model

use serde::{Deserialize, Serialize};

use super::field::ResolvedField;

/// An ordered, deduplicated list of resolved fields
///
/// Field order is the order in which field paths were first observed and is
/// stable across repeated inference runs over the same input. Serializes as a
/// plain JSON array of field definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDescriptor {
    fields: Vec<ResolvedField>,
}

impl SchemaDescriptor {
    /// Wrap an already-resolved field list
    ///
    /// Callers are expected to supply unique field names; the inference
    /// builder guarantees this by construction.
    pub fn from_fields(fields: Vec<ResolvedField>) -> Self {
        Self { fields }
    }

    /// All fields, in first-seen order
    pub fn fields(&self) -> &[ResolvedField] {
        &self.fields
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the descriptor holds no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedField> {
        self.fields.iter()
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in descriptor order
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a SchemaDescriptor {
    type Item = &'a ResolvedField;
    type IntoIter = std::slice::Iter<'a, ResolvedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
