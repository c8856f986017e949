//! Row projection for display
//!
//! Maps raw result documents onto a requested, ordered list of field paths,
//! substituting `null` for anything absent. Shares the single-wrapper-key
//! unwrapping heuristic with the inference engine so schema and rows always
//! agree on the effective document shape.

mod row;
mod unwrap;

pub use row::{ProjectedRow, project, project_rows};
pub use unwrap::unwrap_document;
