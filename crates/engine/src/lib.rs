//! Board state engine for the tack application.
//!
//! This crate holds the live board and the drag-and-drop machinery that
//! moves tasks between columns. It has no knowledge of any particular
//! terminal or windowing system; hosts feed it coordinates and events.
//!
//! # Overview
//!
//! - [`repository`]: the live board, its mutations and best-effort saving
//! - [`session`]: the single in-flight drag session
//! - [`sensor`]: pointer and touch activation thresholds
//! - [`collision`]: picking the hovered column from drop regions
//! - [`geometry`]: points and rectangles
//! - [`controller`]: the surface presented to views
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use tack_config::MemoryBoardStore;
//! use tack_engine::{
//!     BoardController, DragHandle, InputEvent, InputKind, InputOutcome, Point, Rect,
//!     SensorPolicy,
//! };
//!
//! let mut controller =
//!     BoardController::load(Box::new(MemoryBoardStore::new()), SensorPolicy::default());
//! controller.register_drop_region("todo", Rect::new(0.0, 0.0, 30.0, 20.0));
//! controller.register_drop_region("inProgress", Rect::new(30.0, 0.0, 30.0, 20.0));
//! controller.register_drop_region("done", Rect::new(60.0, 0.0, 30.0, 20.0));
//!
//! let at = Instant::now();
//! controller.handle_input(InputEvent::Down {
//!     kind: InputKind::Pointer,
//!     pointer: 0,
//!     position: Point::new(5.0, 3.0),
//!     handle: Some(DragHandle::new("todo", 1u64)),
//!     at,
//! });
//! controller.handle_input(InputEvent::Move { pointer: 0, position: Point::new(70.0, 3.0), at });
//! let outcome = controller.handle_input(InputEvent::Up { pointer: 0, position: Point::new(70.0, 3.0) });
//!
//! assert!(matches!(outcome, InputOutcome::Dropped(drop) if drop.is_moved()));
//! ```

pub mod collision;
pub mod controller;
pub mod geometry;
pub mod repository;
pub mod sensor;
pub mod session;

pub use collision::DropRegions;
pub use controller::{BoardController, InputOutcome};
pub use geometry::{Point, Rect};
pub use repository::TaskRepository;
pub use sensor::{
    DragHandle, InputEvent, InputKind, PointerId, Sensor, SensorAction, SensorPolicy,
};
pub use session::{DiscardReason, DragController, DragSession, DropOutcome};
