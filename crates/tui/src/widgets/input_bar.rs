//! Add-task bar: the column picker and the text input.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::palette::Palette;
use crate::state::InputState;

/// Hint shown when the input is empty and unfocused.
pub const INPUT_PLACEHOLDER: &str = "Press a to add a task";

/// Renders the add-task bar.
///
/// `column_name` is the display name of the picked column.
pub fn render_input_bar(
    input: &InputState,
    column_name: Option<&str>,
    focused: bool,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_style = if focused {
        Style::default().fg(palette.selected)
    } else {
        Style::default().fg(palette.border)
    };
    let block = Block::default()
        .title(Span::styled(" New task ", palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.is_empty() {
        return;
    }

    let [text_area, hint_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(25)]).areas(inner);

    let mut spans = vec![
        Span::styled(
            format!("[{}] ", column_name.unwrap_or("-")),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if focused {
        spans.push(Span::styled(input.text.clone(), Style::default().fg(palette.text)));
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(palette.selected)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    } else if input.text.is_empty() {
        spans.push(Span::styled(
            INPUT_PLACEHOLDER,
            palette.hint().add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::styled(input.text.clone(), palette.hint()));
    }
    Paragraph::new(Line::from(spans)).render(text_area, buf);

    let hint = if focused {
        "Tab column · Enter add"
    } else {
        "Tab column"
    };
    Paragraph::new(Span::styled(hint, palette.hint()))
        .alignment(Alignment::Right)
        .render(hint_area, buf);
}
