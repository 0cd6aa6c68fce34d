//! Form builder view (create and edit)

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field_with_value, field_preview_lines};
use crate::state::{AppState, BuilderButton, BuilderFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the builder: inputs, field previews and the button row
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let heading = if state.is_editing {
        " Edit Form "
    } else {
        " Create New Form "
    };
    let block = Block::default()
        .title(heading)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Length(5),             // Description
            Constraint::Min(3),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    draw_field_with_value(
        frame,
        chunks[0],
        "Form Title",
        &state.form_title,
        state.builder_focus == BuilderFocus::Title,
        false,
    );

    draw_field_with_value(
        frame,
        chunks[1],
        "Form Description",
        &state.form_description,
        state.builder_focus == BuilderFocus::Description,
        true,
    );

    draw_fields(frame, chunks[2], state);
    draw_button_row(frame, chunks[3], state);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": button  "),
        Span::styled(
            crate::platform::SAVE_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": save  "),
        Span::styled(
            format!("{}Y", crate::platform::FIELD_SHORTCUT_PREFIX),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": copy html  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": back"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}

fn draw_fields(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" Fields ({}) ", state.builder_fields.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines: Vec<Line> = if state.builder_fields.is_empty() {
        let hint = if state.fields_enabled() {
            "No fields yet. Add one with the buttons below."
        } else {
            "Enter a title and save to start adding fields."
        };
        vec![Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .builder_fields
            .iter()
            .flat_map(field_preview_lines)
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(state.scroll_offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

fn draw_button_row(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let row_focused = state.builder_focus == BuilderFocus::Buttons;
    for (idx, button) in BuilderButton::ALL.iter().enumerate() {
        let is_selected = row_focused && state.selected_button == *button;
        let is_enabled = button.field_type().is_none() || state.fields_enabled();
        render_button(
            frame,
            chunks[idx],
            &button_label(*button, state),
            is_selected,
            is_enabled,
        );
    }
}

/// Label for a builder button given the current flags
fn button_label(button: BuilderButton, state: &AppState) -> String {
    match button.field_type() {
        Some(kind) => format!("Add {}", kind.label()),
        None if state.is_editing || state.is_form_created => "Update Form".to_string(),
        None => "Create Form".to_string(),
    }
}
