//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update the board and the view.
///
/// # Examples
///
/// ```
/// use tack_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Escape: cancel a drag, leave the input bar, or clear selection.
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Switch between the light and dark theme.
    ToggleTheme,
    /// Delete the selected task.
    DeleteSelected,

    // --- Add-task bar ---
    /// Focus the add-task input.
    StartInput,
    /// Type a character into the add-task input.
    InputChar {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the add-task input.
    InputBackspace,
    /// Add the typed task to the picked column.
    InputSubmit,
    /// Pick the next column in the add-task bar.
    CycleColumn,

    // --- Pointer ---
    /// Left button pressed at (column, row).
    PointerDown {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Pointer moved with the button held.
    PointerDrag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Left button released at (column, row).
    PointerUp {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
    /// The terminal lost focus; any gesture in progress is interrupted.
    FocusLost,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::ToggleTheme.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message edits the add-task bar.
    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Self::StartInput
                | Self::InputChar { .. }
                | Self::InputBackspace
                | Self::InputSubmit
                | Self::CycleColumn
        )
    }

    /// Returns `true` if this message comes from the pointer.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_protocol::Message;
    ///
    /// assert!(Message::PointerUp { column: 1, row: 2 }.is_pointer());
    /// assert!(Message::FocusLost.is_pointer());
    /// assert!(!Message::Quit.is_pointer());
    /// ```
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. }
                | Self::PointerDrag { .. }
                | Self::PointerUp { .. }
                | Self::FocusLost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::Escape.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
    }

    #[test]
    fn message_input_detection() {
        assert!(Message::StartInput.is_input());
        assert!(Message::InputChar { ch: 'a' }.is_input());
        assert!(Message::InputBackspace.is_input());
        assert!(Message::InputSubmit.is_input());
        assert!(Message::CycleColumn.is_input());
        assert!(!Message::DeleteSelected.is_input());
    }

    #[test]
    fn message_serialization_roundtrip() {
        let messages = vec![
            Message::NavigateLeft,
            Message::Escape,
            Message::ToggleTheme,
            Message::DeleteSelected,
            Message::InputChar { ch: 'x' },
            Message::CycleColumn,
            Message::PointerDown { column: 10, row: 5 },
            Message::PointerDrag { column: 11, row: 5 },
            Message::PointerUp { column: 12, row: 6 },
            Message::FocusLost,
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::ToggleTheme).expect("serialize");
        assert_eq!(json, r#""toggle_theme""#);

        let json = serde_json::to_string(&Message::FocusLost).expect("serialize");
        assert_eq!(json, r#""focus_lost""#);
    }
}
