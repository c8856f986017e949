//! Schema inference engine for document query results
//!
//! Derives a stable, typed field schema from loosely-typed JSON result
//! documents, ready for a visualization tool's field-definition API.
//!
//! ## Features
//!
//! - **Type classification** - Closed tag vocabulary over raw JSON values,
//!   with URL and date/time heuristics for strings
//! - **Field observation** - Insertion-ordered aggregation across documents,
//!   recursing into nested objects with dotted paths
//! - **Deterministic resolution** - Fixed type precedence
//!   (number > boolean > url > date > string) and first-seen field ordering
//! - **Two strategies, one engine** - Sampling over raw documents and
//!   declarative inference from structural flavor descriptions feed the same
//!   aggregator and builder
//!
//! ## Example
//!
//! ```rust
//! use document_schema_core::inference::SampleInferrer;
//! use serde_json::json;
//!
//! let mut inferrer = SampleInferrer::new();
//! inferrer.add_document(&json!({"id": 1, "site": "https://example.com"}));
//!
//! let descriptor = inferrer.finalize().unwrap();
//! assert_eq!(descriptor.names(), vec!["id", "site"]);
//! ```

mod builder;
mod classify;
mod config;
mod error;
mod flavor;
mod observe;
mod sampler;

pub use builder::build_descriptor;
pub use classify::{TypeTag, classify, classify_declared, is_date_like, is_url_like};
pub use config::{InferenceConfig, InferenceConfigBuilder};
pub use error::InferenceError;
pub use flavor::FlavorInferrer;
pub use observe::{FieldObservation, FieldObservations};
pub use sampler::{InferenceStats, SampleInferrer};
