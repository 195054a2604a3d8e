//! Shared protocol types for the tack application.
//!
//! This crate defines the core types used across all tack components,
//! including tasks, columns, the board structure, messages, and error types.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers and the `Task` struct
//! - [`board`]: Column keys, columns, and the `Board` struct
//! - [`seed`]: The built-in seed board
//! - [`theme`]: The light/dark display preference
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for board operations
//!
//! # Examples
//!
//! Working with the seed board:
//!
//! ```
//! use tack_protocol::{seed_board, TaskId};
//!
//! let board = seed_board();
//!
//! // Add a task to the first column
//! let (board, task) = board.with_task_added("todo", "Write tests").unwrap();
//!
//! // Move a seeded task along
//! let board = board
//!     .with_task_moved("todo", "done", &TaskId::from(1u64))
//!     .unwrap();
//!
//! assert_eq!(board.column("done").unwrap().len(), 1);
//! assert!(board.find_task(&task.id).is_some());
//! ```

pub mod board;
pub mod error;
pub mod message;
pub mod seed;
pub mod task;
pub mod theme;

// Re-export primary types at crate root for convenience
pub use board::{Board, BoardBuilder, Column, ColumnKey, TaskLocation};
pub use error::{BoardError, Result};
pub use message::Message;
pub use seed::seed_board;
pub use task::{Task, TaskId};
pub use theme::{Theme, UnknownTheme};
