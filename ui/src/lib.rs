//! This crate contains the user form: its state store, field validation,
//! submission handling and the Dioxus components that render it.

pub mod app;
pub use app::UserFormService;

pub mod components;
pub mod form;
pub mod services;
pub mod utils;
