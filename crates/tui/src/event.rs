//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Keys map differently while the add-task input
//! has focus, so there are two key tables.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tack_protocol::Message;

/// Default poll timeout for events.
///
/// Kept short so a held press can be re-checked between events.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard, mouse or focus) to an application message.
///
/// `input_focused` selects the key table: when the add-task input has focus,
/// printable keys are typed into it instead of triggering board actions.
#[must_use]
pub fn event_to_message(event: &Event, input_focused: bool) -> Option<Message> {
    match event {
        Event::Key(key) if input_focused => key_to_input_message(*key),
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        Event::FocusLost => Some(Message::FocusLost),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only the left button takes part in dragging: press, drag and release
/// become pointer messages carrying the cell coordinates.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp { column, row }),
        _ => None,
    }
}

/// Converts a terminal key event to a board message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Cancel drag or clear selection |
/// | `Left` / `Right` | Select column |
/// | `Up` / `Down` | Select card |
/// | `a` | Focus the add-task input |
/// | `Tab` | Pick the next column for new tasks |
/// | `d` or `Delete` | Delete the selected card |
/// | `t` | Toggle light/dark theme |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char('a') => Some(Message::StartInput),
        KeyCode::Tab => Some(Message::CycleColumn),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::DeleteSelected),
        KeyCode::Char('t') => Some(Message::ToggleTheme),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to an add-task input message.
///
/// # Key Bindings (Input Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Enter` | Add the task |
/// | `Esc` | Leave the input |
/// | `Tab` | Pick the next column |
/// | `Backspace` | Delete the last character |
/// | Any char | Type |
#[must_use]
pub fn key_to_input_message(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::InputSubmit),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab => Some(Message::CycleColumn),
        KeyCode::Backspace => Some(Message::InputBackspace),
        KeyCode::Char(ch) => Some(Message::InputChar { ch }),
        _ => None,
    }
}
