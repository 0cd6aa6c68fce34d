//! Application state module

mod app_state;
mod dialogs;

pub use app_state::*;
pub use dialogs::*;
