//! Form state for the user form
//!
//! - **types**: field names, per-field state and the form-wide record
//! - **reducer**: `FormAction` transitions, immutable and in-place
//! - **submission**: submit gating and dialog selection, derived from the store

pub mod reducer;
pub mod submission;
pub mod types;

pub use submission::*;
pub use types::*;
