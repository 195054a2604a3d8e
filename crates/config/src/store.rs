//! Board snapshot and theme preference storage.
//!
//! The board engine treats storage as a best-effort cache: it loads once at
//! startup and saves after every change, but the in-memory board stays
//! authoritative. This module provides the storage contracts and their file
//! and in-memory implementations.
//!
//! # Snapshot Format
//!
//! [`FileBoardStore`] writes the board as indented JSON, one entry per column
//! in display order:
//!
//! ```json
//! {
//!   "todo": {
//!     "name": "To do",
//!     "items": [
//!       { "id": 1, "content": "Write project" },
//!       { "id": "3f1c9a6e-1d2b-4c55-9a0e-6f1f2b3c4d5e", "content": "Ship it" }
//!     ]
//!   },
//!   "done": { "name": "Done", "items": [] }
//! }
//! ```
//!
//! [`FileThemeStore`] writes the bare word `light` or `dark`.
//!
//! # Examples
//!
//! ```no_run
//! use tack_config::store::{load_board_or_seed, FileBoardStore};
//!
//! let store = FileBoardStore::new("/tmp/tack/board.json");
//! let board = load_board_or_seed(&store);
//! println!("{} tasks", board.task_count());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tack_protocol::{seed_board, Board, Theme};
use tracing::{debug, instrument, warn};

use crate::error::{ConfigError, Result};
use crate::persistence::write_file;

/// Loads and saves board snapshots.
pub trait BoardStore: Send {
    /// Reads the stored snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if a snapshot exists but cannot be read, decoded,
    /// or breaks the one-column-per-task rule.
    fn load(&self) -> Result<Option<Board>>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save(&self, board: &Board) -> Result<()>;
}

/// Loads and saves the light/dark preference.
pub trait ThemeStore: Send {
    /// Reads the stored preference, `None` if unset or unrecognized.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference exists but cannot be read.
    fn load(&self) -> Result<Option<Theme>>;

    /// Replaces the stored preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be written.
    fn save(&self, theme: Theme) -> Result<()>;
}

/// Loads the stored board, falling back to the seed board.
///
/// A missing snapshot silently yields the seed board. A snapshot that
/// cannot be read or decoded is logged at `warn` and also yields the seed
/// board.
///
/// # Examples
///
/// ```
/// use tack_config::store::{load_board_or_seed, MemoryBoardStore};
/// use tack_protocol::seed_board;
///
/// let store = MemoryBoardStore::new();
/// assert_eq!(load_board_or_seed(&store), seed_board());
/// ```
pub fn load_board_or_seed(store: &dyn BoardStore) -> Board {
    match store.load() {
        Ok(Some(board)) => {
            debug!(
                columns = board.len(),
                tasks = board.task_count(),
                "loaded stored board"
            );
            board
        }
        Ok(None) => {
            debug!("no stored board, using seed board");
            seed_board()
        }
        Err(e) => {
            warn!(error = %e, "stored board is unusable, using seed board");
            seed_board()
        }
    }
}

/// Loads the stored theme, logging and discarding read failures.
pub fn load_theme(store: &dyn ThemeStore) -> Option<Theme> {
    store.load().unwrap_or_else(|e| {
        warn!(error = %e, "failed to read theme preference");
        None
    })
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(?path, "store file not found");
            Ok(None)
        }
        Err(e) => Err(ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Board snapshot stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileBoardStore {
    path: PathBuf,
}

impl FileBoardStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file and its parent directories are created on first save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BoardStore for FileBoardStore {
    #[instrument(skip(self), fields(path = ?self.path))]
    fn load(&self) -> Result<Option<Board>> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(None);
        };

        let board = Board::from_json(&content).map_err(|e| {
            warn!(path = ?self.path, error = %e, "failed to decode board snapshot");
            ConfigError::InvalidSnapshot(e)
        })?;
        Ok(Some(board))
    }

    #[instrument(skip(self, board), fields(path = ?self.path, tasks = board.task_count()))]
    fn save(&self, board: &Board) -> Result<()> {
        let content = board.to_json_pretty()?;
        write_file(&self.path, &content)?;
        debug!("board snapshot saved");
        Ok(())
    }
}

/// Theme preference stored as a one-word text file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the preference file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(None);
        };

        match content.trim().parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(e) => {
                debug!(path = ?self.path, error = %e, "ignoring unrecognized theme preference");
                Ok(None)
            }
        }
    }

    fn save(&self, theme: Theme) -> Result<()> {
        write_file(&self.path, theme.as_str())
    }
}

#[derive(Debug, Default)]
struct MemoryBoardState {
    board: Option<Board>,
    saves: usize,
    fail_saves: bool,
}

/// Board store that keeps the snapshot in memory.
///
/// Clones share the same snapshot, so a test can hand one clone to the
/// engine and inspect what was saved through another.
///
/// # Examples
///
/// ```
/// use tack_config::store::{BoardStore, MemoryBoardStore};
/// use tack_protocol::seed_board;
///
/// let store = MemoryBoardStore::new();
/// let handle = store.clone();
///
/// store.save(&seed_board()).unwrap();
/// assert_eq!(handle.save_count(), 1);
/// assert_eq!(handle.snapshot(), Some(seed_board()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBoardStore {
    state: Arc<Mutex<MemoryBoardState>>,
}

impl MemoryBoardStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `board`.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        let store = Self::default();
        store.lock().board = Some(board);
        store
    }

    /// Makes every subsequent save fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    /// Returns the last successfully saved snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Option<Board> {
        self.lock().board.clone()
    }

    /// Returns the number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryBoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BoardStore for MemoryBoardStore {
    fn load(&self) -> Result<Option<Board>> {
        Ok(self.lock().board.clone())
    }

    fn save(&self, board: &Board) -> Result<()> {
        let mut state = self.lock();
        if state.fail_saves {
            return Err(ConfigError::StoreUnavailable(
                "memory store is failing saves".to_string(),
            ));
        }
        state.board = Some(board.clone());
        state.saves += 1;
        Ok(())
    }
}

/// Theme store that keeps the preference in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    theme: Arc<Mutex<Option<Theme>>>,
}

impl MemoryThemeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored preference.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        *self.theme.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>> {
        Ok(self.current())
    }

    fn save(&self, theme: Theme) -> Result<()> {
        *self.theme.lock().unwrap_or_else(PoisonError::into_inner) = Some(theme);
        Ok(())
    }
}
