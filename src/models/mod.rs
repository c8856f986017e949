//! Data models shared across the crate
//!
//! The resolved field and descriptor types are the output contract of the
//! inference engine and the input contract of the row projector.

pub mod descriptor;
pub mod field;

pub use descriptor::SchemaDescriptor;
pub use field::{ConceptRole, FieldSemantics, ResolvedField, SemanticGroup, VisualizationType};
