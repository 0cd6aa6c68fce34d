//! Text prompt dialog used to collect field labels and options

use super::base::{render_dialog, DialogConfig};
use crate::state::PendingPrompt;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

/// Render the prompt with its current input and a cursor
pub fn render_prompt_dialog(frame: &mut Frame, prompt: &PendingPrompt) {
    let title = prompt.title();
    let input = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(prompt.input.as_str(), Style::default().fg(Color::White)),
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]);

    let hint = vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" ok  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: prompt.message(),
            extra: vec![Line::from(""), input],
            hint: Some(hint),
            max_width: 64,
        },
    );
}
