//! Colors for the light and dark themes, and picking the initial theme.

use ratatui::style::{Color, Modifier, Style};
use tack_protocol::Theme;

/// Environment variable terminals use to report their fore/background colors.
pub const COLORFGBG: &str = "COLORFGBG";

/// The colors every widget draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Regular text.
    pub text: Color,
    /// Hints and secondary text.
    pub muted: Color,
    /// Titles and the application name.
    pub accent: Color,
    /// Borders of unfocused elements.
    pub border: Color,
    /// Border of the selected column or card.
    pub selected: Color,
    /// Border of the column a dragged card hovers.
    pub hover: Color,
    /// The delete button.
    pub danger: Color,
    /// Background of the card lifted by a drag.
    pub lifted: Color,
}

impl Palette {
    /// The palette for `theme`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Theme;
    /// use tack_tui::palette::Palette;
    ///
    /// assert_ne!(Palette::for_theme(Theme::Light), Palette::for_theme(Theme::Dark));
    /// ```
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                selected: Color::Blue,
                hover: Color::Green,
                danger: Color::Red,
                lifted: Color::LightYellow,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                selected: Color::Cyan,
                hover: Color::LightGreen,
                danger: Color::LightRed,
                lifted: Color::Blue,
            },
        }
    }

    /// Base style: text on the background.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for hints.
    #[must_use]
    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for titles.
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

/// Guesses the theme from a `COLORFGBG` value such as `"15;0"`.
///
/// The last field is the background color index; indices 0 to 6 and 8 are
/// dark colors. Returns `None` when the value cannot be read.
///
/// # Examples
///
/// ```
/// use tack_protocol::Theme;
/// use tack_tui::palette::theme_from_colorfgbg;
///
/// assert_eq!(theme_from_colorfgbg("15;0"), Some(Theme::Dark));
/// assert_eq!(theme_from_colorfgbg("0;default;15"), Some(Theme::Light));
/// assert_eq!(theme_from_colorfgbg("default"), None);
/// ```
#[must_use]
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match background {
        0..=6 | 8 => Some(Theme::Dark),
        _ => Some(Theme::Light),
    }
}

/// Picks the theme to start with.
///
/// A stored preference wins, then the terminal's reported background, then
/// light.
#[must_use]
pub fn initial_theme(stored: Option<Theme>, colorfgbg: Option<&str>) -> Theme {
    stored
        .or_else(|| colorfgbg.and_then(theme_from_colorfgbg))
        .unwrap_or_default()
}
