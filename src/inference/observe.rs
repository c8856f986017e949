//! Field observation aggregation across sampled documents

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::classify::{TypeTag, classify};

/// Accumulated type evidence for one field path
///
/// Created on first sighting of a path during an inference pass and discarded
/// once the pass resolves; never persisted across calls.
#[derive(Debug, Clone, Default)]
pub struct FieldObservation {
    tags: Vec<TypeTag>,
    saw_numeric: bool,
}

impl FieldObservation {
    /// Record one observed tag, keeping the tag set deduplicated
    pub fn record(&mut self, tag: TypeTag) {
        if tag == TypeTag::Number {
            self.saw_numeric = true;
        }
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Distinct tags in observation order
    pub fn tags(&self) -> &[TypeTag] {
        &self.tags
    }

    /// Whether a numeric value was ever seen for this path
    pub fn saw_numeric(&self) -> bool {
        self.saw_numeric
    }

    /// Whether this path was only ever seen as a nested object
    ///
    /// Such paths are pure interior nodes; their children carry the data and
    /// the path itself is not emitted as a field.
    pub fn is_interior(&self) -> bool {
        !self.tags.is_empty() && self.tags.iter().all(|t| *t == TypeTag::Object)
    }
}

/// Insertion-ordered map of field paths to their observations
///
/// Walks documents key by key, recursing into nested objects with dotted
/// path prefixes. The order in which paths are first seen across the whole
/// document set is preserved; re-observing a path never moves it.
#[derive(Debug, Clone)]
pub struct FieldObservations {
    order: Vec<String>,
    by_path: HashMap<String, FieldObservation>,
    detect_formats: bool,
}

impl Default for FieldObservations {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldObservations {
    /// Create an empty observation set with string heuristics enabled
    pub fn new() -> Self {
        Self::with_format_detection(true)
    }

    /// Create an empty observation set, optionally disabling the URL/date
    /// string heuristics
    pub fn with_format_detection(detect_formats: bool) -> Self {
        Self {
            order: Vec::new(),
            by_path: HashMap::new(),
            detect_formats,
        }
    }

    /// Record a tag for a path, creating the observation on first sight
    pub fn record(&mut self, path: &str, tag: TypeTag) {
        let tag = if self.detect_formats {
            tag
        } else {
            tag.without_string_heuristics()
        };

        if let Some(observation) = self.by_path.get_mut(path) {
            observation.record(tag);
        } else {
            let mut observation = FieldObservation::default();
            observation.record(tag);
            self.order.push(path.to_string());
            self.by_path.insert(path.to_string(), observation);
        }
    }

    /// Walk one document, classifying every field
    ///
    /// Recursion descends into nested objects only; array element structure
    /// is never walked. Non-object documents contribute nothing.
    pub fn observe_document(&mut self, document: &Value) {
        match document.as_object() {
            Some(map) => self.observe_object("", map),
            None => {
                tracing::debug!("skipping non-object document during field observation");
            }
        }
    }

    fn observe_object(&mut self, prefix: &str, map: &Map<String, Value>) {
        for (key, value) in map {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };

            self.record(&path, classify(value));

            if let Value::Object(nested) = value {
                self.observe_object(&path, nested);
            }
        }
    }

    /// Number of distinct paths observed
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing has been observed yet
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up the observation for a path
    pub fn get(&self, path: &str) -> Option<&FieldObservation> {
        self.by_path.get(path)
    }

    /// Iterate over observations in first-seen path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldObservation)> {
        self.order
            .iter()
            .filter_map(|path| self.by_path.get(path).map(|obs| (path.as_str(), obs)))
    }
}
