//! "Your Forms" list view

use super::{render_scrollable_list, selectable_list};
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};

/// Draw the list of stored forms that have at least one field
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Your Forms ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.forms.is_empty() {
        let content = Paragraph::new("No forms created yet.\nPress 'c' to create a new form.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = state
        .forms
        .iter()
        .enumerate()
        .map(|(idx, form)| {
            let title_style = if idx == state.selected_index {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(form.title.as_str(), title_style),
                Span::raw("  "),
                Span::styled(
                    format!("Fields: {}", form.fields.len()),
                    Style::default().fg(Color::Black).bg(Color::Blue),
                ),
            ])];
            if !form.description.is_empty() {
                let first_line = form.description.lines().next().unwrap_or_default();
                lines.push(Line::from(Span::styled(
                    format!("  {first_line}"),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("  created {}", form.created_at.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Color::DarkGray),
            )));
            ListItem::new(lines)
        })
        .collect();

    let list = selectable_list(items, block);
    render_scrollable_list(frame, area, list, state.selected_index);
}
