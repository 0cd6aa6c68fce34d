//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, HighlightSpacing, List, ListItem, ListState},
    Frame,
};

/// Marker drawn in front of the selected list entry
pub const SELECTED_SYMBOL: &str = "▸ ";

/// Build a list whose selected entry is marked and shaded
pub fn selectable_list<'a>(items: Vec<ListItem<'a>>, block: Block<'a>) -> List<'a> {
    List::new(items)
        .block(block)
        .highlight_symbol(SELECTED_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
}

/// Render a list scrolled so the entry at `selected_index` is visible.
///
/// Out-of-range indexes select nothing.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let selected = (selected_index < list.len()).then_some(selected_index);
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_rows(selected_index: usize) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(12, 3)).unwrap();
        terminal
            .draw(|frame| {
                let list = selectable_list(
                    vec![ListItem::new("one"), ListItem::new("two")],
                    Block::default(),
                );
                let area = frame.area();
                render_scrollable_list(frame, area, list, selected_index);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..2u16)
            .map(|y| {
                (0..12u16)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_selected_entry_is_marked() {
        assert_eq!(rendered_rows(1), vec!["  one", "▸ two"]);
    }

    #[test]
    fn test_out_of_range_selection_marks_nothing() {
        assert_eq!(rendered_rows(5), vec!["  one", "  two"]);
    }
}
