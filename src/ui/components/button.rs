//! Bordered buttons for the sidebar and the builder's button row

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Border and label styles for a button.
///
/// A disabled button stays dim even when selected; its border turns yellow so
/// the cursor is still visible on an add-field button before a form exists.
fn button_styles(is_selected: bool, is_enabled: bool) -> (Style, Style) {
    match (is_selected, is_enabled) {
        (true, true) => (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        (true, false) => (
            Style::default().fg(Color::Yellow),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ),
        (false, true) => (Style::default().fg(Color::DarkGray), Style::default()),
        (false, false) => (
            Style::default().fg(Color::DarkGray),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        ),
    }
}

fn render_bordered(frame: &mut Frame, area: Rect, line: Line, border_style: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Render a button with a centered label
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let (border_style, text_style) = button_styles(is_selected, is_enabled);
    render_bordered(
        frame,
        area,
        Line::from(Span::styled(content, text_style)),
        border_style,
    );
}

/// Render a sidebar entry: the shortcut key highlighted, then its label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let (border_style, text_style) = button_styles(is_selected, is_enabled);
    let key_style = if is_enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        text_style
    };
    let line = Line::from(vec![
        Span::styled(format!(" {key} "), key_style),
        Span::raw(" "),
        Span::styled(label, text_style),
    ]);
    render_bordered(frame, area, line, border_style);
}
