//! Alert dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::{Alert, AlertKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an alert overlay centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, alert: &Alert) {
    let (title, color) = match alert.kind {
        AlertKind::Info => ("Notice", Color::Cyan),
        AlertKind::Error => ("Error", Color::Red),
    };

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: color,
            border_color: color,
            message: &alert.message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
