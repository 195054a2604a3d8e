//! Widget components for the tack TUI.
//!
//! Each widget is a plain function that renders state into a buffer, which
//! keeps them easy to test and compose. Positions come from
//! [`HitMap`](crate::layout::HitMap), so the same geometry drives drawing and
//! mouse hit-testing.
//!
//! # Modules
//!
//! - [`board`]: every column, left to right
//! - [`lane`]: one column with its title, count and cards
//! - [`task_card`]: one card with its delete button
//! - [`drag`]: the card lifted under the pointer during a drag
//! - [`input_bar`]: the add-task input and column picker
//! - [`status_bar`]: keybinding hints or the drag in progress
//! - [`help`]: the keybinding overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use tack_protocol::{Theme, seed_board};
//! use tack_tui::layout::HitMap;
//! use tack_tui::palette::Palette;
//! use tack_tui::widgets;
//!
//! let board = seed_board();
//! let area = Rect::new(0, 0, 80, 20);
//! let map = HitMap::compute(&board, area);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(
//!     &board,
//!     &map,
//!     widgets::BoardView::default(),
//!     &Palette::for_theme(Theme::Light),
//!     &mut buf,
//! );
//! ```

pub mod board;
pub mod drag;
pub mod help;
pub mod input_bar;
pub mod lane;
pub mod status_bar;
pub mod task_card;

pub use board::{BoardView, render_board};
pub use drag::render_drag_card;
pub use help::render_help_overlay;
pub use input_bar::render_input_bar;
pub use lane::{LaneHighlight, render_lane};
pub use status_bar::{Status, render_status_bar};
pub use task_card::{CardLook, render_task_card};
