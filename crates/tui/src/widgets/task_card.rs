//! Task card widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use tack_protocol::Task;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::layout::{DELETE_BUTTON_WIDTH, delete_button_area};
use crate::palette::Palette;

/// Label of the delete button.
pub const DELETE_LABEL: &str = " x ";

/// How a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardLook {
    /// Regular card.
    #[default]
    Normal,
    /// The keyboard selection.
    Selected,
    /// The card is lifted by a drag; its slot is drawn dimmed.
    Placeholder,
}

/// Renders one card: a bordered box with the task content and a delete
/// button on the right.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_protocol::{Task, Theme};
/// use tack_tui::palette::Palette;
/// use tack_tui::widgets::{CardLook, render_task_card};
///
/// let area = Rect::new(0, 0, 30, 3);
/// let mut buf = Buffer::empty(area);
/// let palette = Palette::for_theme(Theme::Light);
///
/// render_task_card(&Task::new("Write docs"), CardLook::Normal, &palette, area, &mut buf);
/// ```
pub fn render_task_card(
    task: &Task,
    look: CardLook,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let (border_style, text_style) = match look {
        CardLook::Normal => (
            Style::default().fg(palette.border),
            Style::default().fg(palette.text),
        ),
        CardLook::Selected => (
            Style::default()
                .fg(palette.selected)
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        CardLook::Placeholder => (
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::DIM),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::DIM | Modifier::ITALIC),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.is_empty() {
        return;
    }

    let max_text = usize::from(inner.width.saturating_sub(DELETE_BUTTON_WIDTH + 1));
    Paragraph::new(Line::from(Span::styled(
        truncate(&task.content, max_text),
        text_style,
    )))
    .render(inner, buf);

    if look != CardLook::Placeholder {
        let button = delete_button_area(area);
        buf.set_string(
            button.x,
            button.y,
            DELETE_LABEL,
            Style::default()
                .fg(palette.danger)
                .add_modifier(Modifier::BOLD),
        );
    }
}

/// Shortens `text` to at most `max` terminal cells, ending in `…` when cut.
///
/// Widths are display widths, so a CJK character counts as two cells.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}
