//! Application state management.
//!
//! This module defines the view state of the TUI: focus, card selection, the
//! add-task input and the help overlay. The board itself lives in the
//! engine; navigation methods take it as an argument so selection can be
//! clamped against the current snapshot.

use tack_protocol::{Board, ColumnKey, Task};

/// The current focus area in the UI.
///
/// Determines which key table is used for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the board columns.
    #[default]
    Board,
    /// Focus is on the add-task input.
    Input,
}

/// The add-task bar: typed text and the column new tasks go to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Text typed so far.
    pub text: String,
    /// Index of the picked column.
    pub column: usize,
}

impl InputState {
    /// Appends a typed character.
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Removes the last character, if any.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Picks the next column, wrapping after the last of `count`.
    pub fn cycle_column(&mut self, count: usize) {
        self.column = if count == 0 {
            0
        } else {
            (self.column + 1) % count
        };
    }

    /// Returns `true` when the text is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// The application view state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current focus area.
    pub focus: Focus,
    /// Index of the currently selected column.
    pub selected_column: usize,
    /// Index of the selected task within the current column, if any.
    pub selected_task: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The add-task bar.
    pub input: InputState,
}

impl AppState {
    /// Creates a new state with focus on the board and nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack_tui::{AppState, Focus};
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.focus, Focus::Board);
    /// assert_eq!(state.selected_task, None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the help overlay visibility.
    ///
    /// When help is shown, other interactions are blocked until
    /// help is dismissed.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed,
    /// `false` if help was not visible.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Moves the column selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self, board: &Board) {
        let count = board.len();
        if count == 0 {
            return;
        }
        self.selected_column = match self.selected_column {
            0 => count - 1,
            n => (n - 1).min(count - 1),
        };
        self.clamp_selection(board);
    }

    /// Moves the column selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self, board: &Board) {
        let count = board.len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column + 1) % count;
        self.clamp_selection(board);
    }

    /// Moves the task selection up within the current column.
    pub fn navigate_up(&mut self, board: &Board) {
        let len = self.column_len(board);
        if len == 0 {
            self.selected_task = None;
            return;
        }

        self.selected_task = Some(match self.selected_task {
            Some(idx) if idx > 0 => (idx - 1).min(len - 1),
            // Wrap to bottom
            Some(_) => len - 1,
            None => 0,
        });
    }

    /// Moves the task selection down within the current column.
    pub fn navigate_down(&mut self, board: &Board) {
        let len = self.column_len(board);
        if len == 0 {
            self.selected_task = None;
            return;
        }

        self.selected_task = Some(match self.selected_task {
            Some(idx) if idx + 1 < len => idx + 1,
            // Wrap to top
            Some(_) | None => 0,
        });
    }

    /// Selects the card at `index` in column `column`.
    pub fn select(&mut self, column: usize, index: usize) {
        self.selected_column = column;
        self.selected_task = Some(index);
    }

    /// Clears the current task selection.
    pub fn clear_selection(&mut self) {
        self.selected_task = None;
    }

    /// Pulls the selection back inside the board after it changed.
    ///
    /// A selection past the end of a shrunk column moves to its last card,
    /// and an empty column selects nothing.
    pub fn clamp_selection(&mut self, board: &Board) {
        let count = board.len();
        if count == 0 {
            self.selected_column = 0;
            self.selected_task = None;
            return;
        }
        self.selected_column = self.selected_column.min(count - 1);

        let len = self.column_len(board);
        self.selected_task = match self.selected_task {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
        if self.input.column >= count {
            self.input.column = 0;
        }
    }

    /// Returns the key of the selected column.
    #[must_use]
    pub fn selected_column_key<'a>(&self, board: &'a Board) -> Option<&'a ColumnKey> {
        board.column_at(self.selected_column).map(|(key, _)| key)
    }

    /// Returns the selected task and the key of its column.
    #[must_use]
    pub fn selected<'a>(&self, board: &'a Board) -> Option<(&'a ColumnKey, &'a Task)> {
        let (key, column) = board.column_at(self.selected_column)?;
        let task = column.items.get(self.selected_task?)?;
        Some((key, task))
    }

    fn column_len(&self, board: &Board) -> usize {
        board
            .column_at(self.selected_column)
            .map_or(0, |(_, column)| column.len())
    }
}
