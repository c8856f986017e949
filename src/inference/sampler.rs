//! Sampling inference strategy
//!
//! Observes a batch of raw result documents and resolves a schema from what
//! was actually seen.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::SchemaDescriptor;
use crate::projection::unwrap_document;

use super::builder::build_descriptor;
use super::config::InferenceConfig;
use super::error::InferenceError;
use super::observe::FieldObservations;

/// Statistics from a sampling inference pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Documents examined
    pub documents_processed: usize,
    /// Records skipped (invalid JSON)
    pub documents_skipped: usize,
    /// Distinct field paths discovered so far
    pub fields_discovered: usize,
}

/// Sampling-based schema inferrer
///
/// Feed it raw result documents, then resolve. Each document is unwrapped
/// (single wrapper keys discarded) before its fields are observed, matching
/// what the row projector does at display time.
///
/// # Example
///
/// ```rust
/// use document_schema_core::inference::SampleInferrer;
/// use serde_json::json;
///
/// let mut inferrer = SampleInferrer::new();
/// inferrer.add_document(&json!({"id": 1, "name": "A"}));
/// inferrer.add_document(&json!({"id": 2, "active": true}));
///
/// let descriptor = inferrer.finalize().unwrap();
/// assert_eq!(descriptor.names(), vec!["id", "name", "active"]);
/// ```
#[derive(Debug)]
pub struct SampleInferrer {
    config: InferenceConfig,
    observations: FieldObservations,
    document_count: usize,
    skipped_count: usize,
}

impl SampleInferrer {
    /// Create an inferrer with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create an inferrer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self {
            observations: FieldObservations::with_format_detection(config.detect_formats),
            config,
            document_count: 0,
            skipped_count: 0,
        }
    }

    /// Observe one already-parsed document
    ///
    /// Documents beyond the configured sample size are ignored.
    pub fn add_document(&mut self, document: &Value) {
        if self.config.sample_size > 0 && self.document_count >= self.config.sample_size {
            return;
        }

        self.document_count += 1;
        self.observations.observe_document(unwrap_document(document));
    }

    /// Observe a batch of documents in order
    pub fn add_documents(&mut self, documents: &[Value]) {
        for document in documents {
            self.add_document(document);
        }
    }

    /// Observe one JSON-encoded document
    ///
    /// Records that fail to parse are counted and skipped; a bad record never
    /// fails the pass.
    pub fn add_json(&mut self, json: &str) {
        match serde_json::from_str::<Value>(json) {
            Ok(document) => self.add_document(&document),
            Err(e) => {
                self.skipped_count += 1;
                tracing::warn!(error = %e, "skipping unparseable record");
            }
        }
    }

    /// Resolve everything observed so far into a schema descriptor
    pub fn finalize(self) -> Result<SchemaDescriptor, InferenceError> {
        build_descriptor(&self.observations)
    }

    /// Number of documents observed so far
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Current inference statistics
    pub fn stats(&self) -> InferenceStats {
        InferenceStats {
            documents_processed: self.document_count,
            documents_skipped: self.skipped_count,
            fields_discovered: self.observations.len(),
        }
    }
}

impl Default for SampleInferrer {
    fn default() -> Self {
        Self::new()
    }
}
