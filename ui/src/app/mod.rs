pub mod user_form_service;

pub use user_form_service::UserFormService;
