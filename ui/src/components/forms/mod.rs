pub mod user_form;

pub use user_form::*;
