//! Column widget.
//!
//! A column is drawn as a bordered box titled with its name and task count,
//! holding the cards the [`HitMap`](crate::layout::HitMap) placed in it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tack_protocol::{Column, TaskId};

use crate::layout::{ColumnHit, column_inner};
use crate::palette::Palette;
use crate::widgets::task_card::{CardLook, render_task_card};

/// Text shown in a column with no tasks.
pub const EMPTY_PLACEHOLDER: &str = "Drop task here";

/// Highlighting for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaneHighlight<'a> {
    /// The keyboard selection is in this column.
    pub selected: bool,
    /// Index of the selected card, if the selection is here.
    pub selected_task: Option<usize>,
    /// A dragged card hovers this column.
    pub hovered: bool,
    /// The task being dragged, drawn as a placeholder where it sits.
    pub dragging: Option<&'a TaskId>,
}

/// Renders a column at the area recorded in `hit`.
pub fn render_lane(
    column: &Column,
    hit: &ColumnHit,
    highlight: LaneHighlight<'_>,
    palette: &Palette,
    buf: &mut Buffer,
) {
    let border_style = if highlight.hovered {
        Style::default()
            .fg(palette.hover)
            .add_modifier(Modifier::BOLD)
    } else if highlight.selected {
        Style::default().fg(palette.selected)
    } else {
        Style::default().fg(palette.border)
    };
    let border_type = if highlight.hovered {
        BorderType::Double
    } else {
        BorderType::Rounded
    };

    let title = format!(" {} ({}) ", column.name, column.len());
    let mut block = Block::default()
        .title(Span::styled(title, palette.title()))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);
    if let Some(marker) = hidden_marker(hit) {
        block = block.title_bottom(Line::styled(marker, palette.hint()).right_aligned());
    }
    block.render(hit.area, buf);

    if column.is_empty() {
        render_placeholder(hit.area, palette, buf);
        return;
    }

    for card in &hit.cards {
        let Some(task) = column.items.get(card.index) else {
            continue;
        };
        let look = if highlight.dragging == Some(&task.id) {
            CardLook::Placeholder
        } else if highlight.selected && highlight.selected_task == Some(card.index) {
            CardLook::Selected
        } else {
            CardLook::Normal
        };
        render_task_card(task, look, palette, card.area, buf);
    }
}

/// Counts the cards scrolled out of view, e.g. ` ↑2 ↓3 more `.
fn hidden_marker(hit: &ColumnHit) -> Option<String> {
    if hit.hidden() == 0 {
        return None;
    }
    let mut parts = Vec::with_capacity(2);
    if hit.hidden_above > 0 {
        parts.push(format!("↑{}", hit.hidden_above));
    }
    if hit.hidden_below > 0 {
        parts.push(format!("↓{}", hit.hidden_below));
    }
    Some(format!(" {} more ", parts.join(" ")))
}

fn render_placeholder(area: Rect, palette: &Palette, buf: &mut Buffer) {
    let inner = column_inner(area);
    if inner.is_empty() {
        return;
    }
    let row = Rect {
        y: inner.y + inner.height / 2,
        height: 1,
        ..inner
    };
    Paragraph::new(Span::styled(
        EMPTY_PLACEHOLDER,
        palette.hint().add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(row, buf);
}
