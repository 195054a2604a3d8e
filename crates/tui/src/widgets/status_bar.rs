//! Status bar widget: keybinding hints, or the drag in progress.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use tack_protocol::Theme;

use crate::palette::Palette;

/// What the status bar reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status<'a> {
    /// Nothing in progress: show keybinding hints.
    Idle,
    /// A card is being dragged.
    Dragging {
        /// Content of the dragged card.
        task: &'a str,
        /// Name of the hovered column, if any.
        target: Option<&'a str>,
    },
}

const HINTS: &[(&str, &str)] = &[
    ("a", "add"),
    ("d", "delete"),
    ("t", "theme"),
    ("?", "help"),
    ("Ctrl+C", "quit"),
];

/// Renders the one-line status bar.
pub fn render_status_bar(
    status: Status<'_>,
    theme: Theme,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(7)]).areas(area);

    let key_style = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let line = match status {
        Status::Idle => Line::from(
            HINTS
                .iter()
                .flat_map(|(key, action)| {
                    [
                        Span::styled(format!(" {key}"), key_style),
                        Span::styled(format!(" {action} "), palette.hint()),
                    ]
                })
                .collect::<Vec<_>>(),
        ),
        Status::Dragging { task, target } => Line::from(vec![
            Span::styled(" Moving ", palette.hint()),
            Span::styled(
                format!("\"{task}\""),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" → ", palette.hint()),
            match target {
                Some(name) => Span::styled(name.to_string(), key_style),
                None => Span::styled("release over a column", palette.hint()),
            },
            Span::styled("  Esc cancel", palette.hint()),
        ]),
    };
    Paragraph::new(line).render(left, buf);

    Paragraph::new(Span::styled(theme.as_str(), palette.hint()))
        .alignment(Alignment::Right)
        .render(right, buf);
}
