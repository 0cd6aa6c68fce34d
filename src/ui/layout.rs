//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{AppState, UiMode, View};
use crate::storage::KeyValueStore;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar entry buttons: (key, label)
const SIDEBAR_ITEMS: &[(&str, &str)] = &[("c", "Create"), ("v", "Forms")];

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with the two entry buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT), // Create
            Constraint::Length(BUTTON_HEIGHT), // Forms
            Constraint::Min(0),
        ])
        .split(area);

    // Entry keys only work from the list view
    let in_list = matches!(state.current_view, View::FormsList);

    for (idx, (key, label)) in SIDEBAR_ITEMS.iter().enumerate() {
        let is_selected = match idx {
            0 => matches!(state.mode(), UiMode::Create),
            _ => matches!(state.mode(), UiMode::List),
        };
        render_sidebar_button(frame, chunks[idx + 1], key, label, is_selected, in_list);
    }
}

/// Draw the status bar
pub fn draw_status_bar<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", mode_label(app.state.mode())),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_view_hints(&app.state),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.store_label.as_str(),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

fn mode_label(mode: UiMode) -> &'static str {
    match mode {
        UiMode::List => "LIST",
        UiMode::Create => "CREATE",
        UiMode::Edit => "EDIT",
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(state: &AppState) -> String {
    if state.pending_prompt.is_some() {
        return "Enter:ok  Esc:cancel".to_string();
    }
    match state.current_view {
        View::FormsList => "j/k:nav  Enter:edit  c:create  d:delete  v:refresh  y:copy html".to_string(),
        View::FormBuilder => format!(
            "Tab:next  {}:save  {p}T/{p}R/{p}B:add field  {p}Y:copy html  Esc:back",
            crate::platform::SAVE_SHORTCUT,
            p = crate::platform::FIELD_SHORTCUT_PREFIX,
        ),
    }
}
