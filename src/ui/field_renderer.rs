//! Field rendering utilities for the builder

use crate::model::{FieldType, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw an editable input with its label as the border title
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if value.ends_with('\n') {
            lines.push(Line::from(""));
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Preview lines for a field: its label followed by its inputs
pub fn field_preview_lines(field: &FormField) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{}. ", field.order + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            field.label.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", field.kind),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    match field.kind {
        FieldType::Text => lines.push(Line::from(Span::styled(
            "   [______________________]",
            Style::default().fg(Color::Gray),
        ))),
        FieldType::Radio | FieldType::Checkbox => {
            let marker = if field.kind == FieldType::Radio {
                "( )"
            } else {
                "[ ]"
            };
            if field.option_list().is_empty() {
                lines.push(Line::from(Span::styled(
                    "   (no options)",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for opt in field.option_list() {
                lines.push(Line::from(vec![
                    Span::styled(format!("   {marker} "), Style::default().fg(Color::Cyan)),
                    Span::raw(opt.as_str()),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_text_preview_has_single_input_line() {
        let field = FormField::new(FieldType::Text, "Name", None, 0);
        let lines = field_preview_lines(&field);
        assert_eq!(lines.len(), 3);
        assert!(text_of(&lines[0]).contains("1. Name"));
        assert!(text_of(&lines[1]).contains("[____"));
    }

    #[test]
    fn test_choice_preview_lists_options_in_order() {
        let field = FormField::new(
            FieldType::Checkbox,
            "Toppings",
            Some(vec!["cheese".into(), "olives".into()]),
            1,
        );
        let lines = field_preview_lines(&field);
        assert_eq!(text_of(&lines[1]), "   [ ] cheese");
        assert_eq!(text_of(&lines[2]), "   [ ] olives");
    }

    #[test]
    fn test_preview_rows_match_state_line_count() {
        let state = AppState {
            builder_fields: vec![
                FormField::new(FieldType::Text, "Name", None, 0),
                FormField::new(FieldType::Radio, "Size", Some(vec!["S".into(), "M".into()]), 1),
                FormField::new(FieldType::Checkbox, "Extras", None, 2),
            ],
            ..Default::default()
        };
        let rendered: usize = state
            .builder_fields
            .iter()
            .map(|f| field_preview_lines(f).len())
            .sum();
        assert_eq!(rendered, state.preview_line_count());
    }

    #[test]
    fn test_radio_preview_uses_round_markers() {
        let field = FormField::new(FieldType::Radio, "Size", Some(vec!["S".into()]), 0);
        let lines = field_preview_lines(&field);
        assert_eq!(text_of(&lines[1]), "   ( ) S");
    }
}
