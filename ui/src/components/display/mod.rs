pub mod alert_dialog;
pub mod state_dump;

pub use alert_dialog::*;
pub use state_dump::*;
