//! User Interface Components
//!
//! - **forms**: the user form card with its submit handling
//! - **display**: the acknowledgment dialog and the state dump
//! - **inputs**: validated input fields and their inline feedback

pub mod display;
pub mod forms;
pub mod inputs;
