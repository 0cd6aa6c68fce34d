//! Confirmation dialog component for deleting a form

use super::base::centered_rect;
use crate::state::PendingDelete;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a confirmation dialog for a pending delete
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingDelete) {
    let dialog_width = 50u16;
    let dialog_area = centered_rect(frame.area(), dialog_width, 10);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let max_display_len = (dialog_width - 6) as usize;
    let display_text = truncate_string(&action.form_title, max_display_len);

    let mut content = vec![
        Line::from(Span::styled(
            "Confirm Delete",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to delete this form?",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(display_text, Style::default().fg(Color::Cyan))),
        Line::from(""),
    ];

    // Cancel, Delete
    let options = [(false, "Cancel", Color::White), (true, "Delete", Color::Red)];
    for (is_delete, label, base_color) in options {
        let is_selected = action.selected_option == is_delete;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(base_color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        content.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}

/// Truncate a string to a maximum number of characters with ellipsis
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_string("Survey", 10), "Survey");
    }

    #[test]
    fn test_truncate_long_string_adds_ellipsis() {
        assert_eq!(truncate_string("Customer satisfaction", 10), "Custome...");
    }

    #[test]
    fn test_truncate_respects_multibyte_chars() {
        assert_eq!(truncate_string("ééééééé", 5), "éé...");
    }
}
