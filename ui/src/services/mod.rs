//! Infrastructure Services
//!
//! - **config**: dialog copy and display settings for the form
//! - **errors**: common error types

pub mod config;
pub mod errors;

pub use config::*;
pub use errors::*;
