//! Help overlay widget.
//!
//! Lists the keyboard and mouse bindings when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::palette::Palette;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 22;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, with a semi-transparent
/// background effect achieved by clearing the area first.
///
/// # Arguments
///
/// * `palette` - Colors of the active theme
/// * `area` - The full terminal area (the overlay will be centered within it)
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use tack_protocol::Theme;
/// use tack_tui::palette::Palette;
/// use tack_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(&Palette::for_theme(Theme::Dark), area, &mut buf);
/// ```
pub fn render_help_overlay(palette: &Palette, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let lines = build_help_lines(palette);

    let help_block = Block::default()
        .title(Span::styled(" Help ", palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());

    let help_text = Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left);

    help_text.render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let header_style = palette.title();
    let key_style = Style::default().fg(palette.hover);
    let text_style = Style::default().fg(palette.text);
    let hint_style = palette.hint().add_modifier(Modifier::ITALIC);

    let binding = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<11}"), key_style),
            Span::styled(action, text_style),
        ])
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("  Navigation", header_style)),
        binding("← →", "Select column"),
        binding("↑ ↓", "Select card"),
        Line::from(""),
        Line::from(Span::styled("  Actions", header_style)),
        binding("a", "Add a task"),
        binding("Tab", "Pick column for new task"),
        binding("Enter", "Add typed task"),
        binding("d / Del", "Delete selected card"),
        binding("t", "Toggle light/dark"),
        binding("Esc", "Cancel drag or input"),
        binding("Ctrl+C", "Quit"),
        binding("?", "Toggle help"),
        Line::from(""),
        Line::from(Span::styled("  Mouse", header_style)),
        binding("Drag card", "Move to another column"),
        binding("Click x", "Delete card"),
        Line::from(""),
        Line::from(Span::styled("  Press any key to close", hint_style)),
    ]
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to available area
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    // Calculate centered position
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use tack_protocol::Theme;

    #[test]
    fn centered_rect_positions_correctly() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(20, 10, area);

        // Should be centered horizontally
        assert_eq!(centered.x, 30); // (80 - 20) / 2
        assert_eq!(centered.y, 7); // (24 - 10) / 2
        assert_eq!(centered.width, 20);
        assert_eq!(centered.height, 10);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 12);
        let centered = centered_rect(100, 50, area);

        // Should be clamped to area dimensions
        assert_eq!(centered.width, 40);
        assert_eq!(centered.height, 12);
        assert_eq!(centered.x, 0);
        assert_eq!(centered.y, 0);
    }

    #[test]
    fn render_help_overlay_creates_output() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);

        render_help_overlay(&Palette::for_theme(Theme::Light), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Navigation"));
        assert!(content.contains("Actions"));
        assert!(content.contains("Mouse"));
    }

    #[test]
    fn render_help_overlay_handles_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        render_help_overlay(&Palette::for_theme(Theme::Dark), area, &mut buf);
    }

    #[test]
    fn build_help_lines_contains_all_keybindings() {
        let lines = build_help_lines(&Palette::for_theme(Theme::Dark));

        let content: String = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        for key in ["←", "→", "↑", "↓", "Tab", "Enter", "Esc", "Ctrl+C", "?"] {
            assert!(content.contains(key), "missing {key}");
        }
        assert!(content.contains("Toggle light/dark"));
        assert!(content.contains("Delete card"));
    }
}
