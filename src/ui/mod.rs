//! UI module for rendering the TUI

mod builder;
mod components;
mod field_renderer;
mod forms_list;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use crate::storage::KeyValueStore;
use components::{render_alert_dialog, render_confirm_dialog, render_prompt_dialog};
use ratatui::Frame;

pub use widgets::{render_scrollable_list, selectable_list};

/// Main draw function
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, &app.state);

    // Draw main content based on current view
    match app.state.current_view {
        View::FormsList => forms_list::draw(frame, main_area, &app.state),
        View::FormBuilder => builder::draw(frame, main_area, &app.state),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Modals, topmost last
    if let Some(pending) = &app.state.pending_delete {
        render_confirm_dialog(frame, pending);
    }
    if let Some(prompt) = &app.state.pending_prompt {
        render_prompt_dialog(frame, prompt);
    }
    if let Some(alert) = app.state.current_alert() {
        render_alert_dialog(frame, alert);
    }
}
