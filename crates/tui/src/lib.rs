//! Terminal UI for the tack Kanban board.
//!
//! This crate renders the board with Ratatui and turns crossterm keyboard
//! and mouse events into engine operations: cards are moved by dragging
//! them between columns, deleted through their `x` button, and added from
//! the input bar at the bottom.
//!
//! # Overview
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Selection, focus and add-task input state
//! - [`layout`]: Screen split and card/column positions for hit-testing
//! - [`palette`]: Light and dark colors, initial theme detection
//! - [`widgets`]: Rendering functions
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use tack_config::{MemoryBoardStore, MemoryThemeStore};
//! use tack_engine::{BoardController, SensorPolicy};
//! use tack_protocol::Theme;
//! use tack_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let controller =
//!         BoardController::load(Box::new(MemoryBoardStore::new()), SensorPolicy::default());
//!     let mut app = App::new(controller, Theme::Light, Box::new(MemoryThemeStore::new()));
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod palette;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use palette::{Palette, initial_theme};
pub use state::{AppState, Focus, InputState};
