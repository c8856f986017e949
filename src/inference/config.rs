//! Configuration for schema inference

use serde::{Deserialize, Serialize};

/// Configuration for schema inference
///
/// The defaults reproduce the engine's documented semantics exactly; callers
/// only reach for this to trade completeness for speed (`sample_size`) or to
/// switch off the string heuristics entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Maximum number of documents to sample (0 = all)
    ///
    /// `sample_size(1)` reproduces the "first row only" strategy: fast, but
    /// fields appearing only in later documents are missed.
    pub sample_size: usize,

    /// Enable the URL/date string heuristics (default: true)
    ///
    /// When disabled, every string resolves to the plain STRING type.
    pub detect_formats: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_size: 0, // All documents
            detect_formats: true,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the sample size (0 = all documents)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Enable or disable URL/date string heuristics
    pub fn detect_formats(mut self, detect: bool) -> Self {
        self.config.detect_formats = detect;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}
