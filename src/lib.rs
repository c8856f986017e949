//! Document Schema Core - Schema inference and row projection for document
//! query results
//!
//! Turns loosely-typed JSON result documents into a stable, typed field
//! schema for a visualization tool, and projects raw documents onto a
//! requested subset of that schema for display:
//! - Schema inference (sampling over raw documents, or declarative from a
//!   structural flavor description)
//! - Deterministic type resolution and first-seen field ordering
//! - Single-wrapper-key unwrapping shared by inference and projection
//! - Row projection with null substitution for absent fields
//!
//! Everything operates synchronously on already-parsed, in-memory JSON; the
//! query transport that produces it lives outside this crate.

pub mod inference;
pub mod models;
pub mod projection;
pub mod query;

// Re-export commonly used types
pub use inference::{
    FieldObservation, FieldObservations, FlavorInferrer, InferenceConfig, InferenceError,
    InferenceStats, SampleInferrer, TypeTag, build_descriptor, classify, classify_declared,
};
pub use models::{
    ConceptRole, FieldSemantics, ResolvedField, SchemaDescriptor, SemanticGroup, VisualizationType,
};
pub use projection::{ProjectedRow, project, project_rows, unwrap_document};
pub use query::{QueryResult, first_flavor};
