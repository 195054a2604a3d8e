//! The card lifted by a drag, drawn under the pointer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tack_protocol::Task;

use crate::layout::{DRAG_CARD_WIDTH, TASK_CARD_HEIGHT};
use crate::palette::Palette;
use crate::widgets::task_card::truncate;

/// Where the lifted card goes for a pointer at `(column, row)`.
///
/// The pointer sits just inside the card's top-left corner, and the card is
/// pushed back inside `area` near the edges.
#[must_use]
pub fn lifted_card_area(column: u16, row: u16, area: Rect) -> Rect {
    let width = DRAG_CARD_WIDTH.min(area.width);
    let height = TASK_CARD_HEIGHT.min(area.height);
    let max_x = (area.x + area.width).saturating_sub(width);
    let max_y = (area.y + area.height).saturating_sub(height);
    Rect {
        x: column.saturating_sub(1).clamp(area.x, max_x),
        y: row.saturating_sub(1).clamp(area.y, max_y),
        width,
        height,
    }
}

/// Draws `task` as a lifted card at the pointer.
pub fn render_drag_card(
    task: &Task,
    pointer: (u16, u16),
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.is_empty() {
        return;
    }
    let card = lifted_card_area(pointer.0, pointer.1, area);
    Clear.render(card, buf);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(
            Style::default()
                .fg(palette.hover)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(palette.lifted));
    let inner = block.inner(card);
    block.render(card, buf);

    Paragraph::new(Span::styled(
        truncate(&task.content, usize::from(inner.width)),
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    ))
    .render(inner, buf);
}
