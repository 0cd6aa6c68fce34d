//! Reusable UI components

mod button;
mod dialog;

pub use button::{render_button, render_sidebar_button, BUTTON_HEIGHT};
pub use dialog::{render_alert_dialog, render_confirm_dialog, render_prompt_dialog};
