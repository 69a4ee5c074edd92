//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: field validation rules and the classes derived from them

pub mod console_macros;
pub mod validation;

pub use validation::*;
