//! Configuration and storage for the tack application.
//!
//! This crate handles loading, validating, and persisting configuration,
//! and provides the stores the board engine loads from and saves to.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`sensors`]: Drag activation thresholds for pointer and touch input
//! - [`store`]: Board snapshot and theme preference stores
//! - [`persistence`]: Config file reading and writing, data paths
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./tack.json5` or `./tack.json`)
//! 2. User config (`~/.config/tack/config.json5` or `~/.config/tack/config.json`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! Loading configuration:
//!
//! ```no_run
//! use tack_config::Config;
//!
//! # async fn example() -> tack_config::Result<()> {
//! let config = Config::load().await?;
//!
//! println!("Board stored at {}", config.storage.board_path()?.display());
//! println!("Touch drags after {}ms", config.sensors.touch.delay_ms);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;
pub mod sensors;
pub mod store;

// Re-export primary types at crate root for convenience
pub use config::{Config, StorageConfig};
pub use error::{ConfigError, Result};
pub use sensors::{PointerSensorConfig, SensorConfig, TouchSensorConfig};
pub use store::{
    BoardStore, FileBoardStore, FileThemeStore, MemoryBoardStore, MemoryThemeStore, ThemeStore,
};
